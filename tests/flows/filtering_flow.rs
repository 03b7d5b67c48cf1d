//! Complete filtering flow tests
//!
//! Real UDP datagrams against a resolver bound to an ephemeral port:
//! query -> classification (cache + assessor) -> sinkhole or empty
//! reply.

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use sinkhole_dns_application::ports::ThreatAssessor;
use sinkhole_dns_application::{ClassificationPolicy, ClassificationService};
use sinkhole_dns_domain::config::DatabaseConfig;
use sinkhole_dns_domain::DomainError;
use sinkhole_dns_infrastructure::assessor::ListAssessor;
use sinkhole_dns_infrastructure::database::create_pool;
use sinkhole_dns_infrastructure::dns::{DnsServer, SinkholePolicy};
use sinkhole_dns_infrastructure::repositories::SqliteVerdictStore;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::UdpSocket;

// ============================================================================
// Fixture
// ============================================================================

/// Assessor wrapper that counts calls into the inner list assessor.
struct CountingAssessor {
    inner: ListAssessor,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ThreatAssessor for CountingAssessor {
    async fn assess(&self, domain: &str) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.assess(domain).await
    }
}

struct TestResolver {
    addr: SocketAddr,
    assessor_calls: Arc<AtomicUsize>,
    // Keeps the database file alive for the duration of the test.
    _db_dir: TempDir,
}

async fn start_resolver() -> TestResolver {
    let db_dir = TempDir::new().unwrap();
    let pool = create_pool(&DatabaseConfig {
        path: db_dir
            .path()
            .join("verdicts.db")
            .to_string_lossy()
            .into_owned(),
        busy_timeout_seconds: 5,
    })
    .await
    .unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let assessor = CountingAssessor {
        inner: ListAssessor::new(["malicious-example.test".to_string()]),
        calls: Arc::clone(&calls),
    };

    let classifier = Arc::new(ClassificationService::new(
        Arc::new(SqliteVerdictStore::new(pool)),
        Arc::new(assessor),
        ClassificationPolicy {
            cache_ttl_seconds: 3600,
            assessment_timeout: Duration::from_millis(500),
            fail_open: true,
        },
    ));

    let server = DnsServer::bind(
        "127.0.0.1:0".parse().unwrap(),
        classifier,
        SinkholePolicy {
            ipv4: Ipv4Addr::UNSPECIFIED,
            ipv6: Ipv6Addr::UNSPECIFIED,
            response_ttl: 60,
        },
    )
    .await
    .unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());

    TestResolver {
        addr,
        assessor_calls: calls,
        _db_dir: db_dir,
    }
}

fn build_query(domain: &str, record_type: RecordType, id: u16) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str_relaxed(domain).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

async fn exchange(addr: SocketAddr, datagram: &[u8]) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(datagram, addr).await.unwrap();

    let mut buf = [0u8; 512];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), socket.recv_from(&mut buf))
        .await
        .expect("no reply within 2s")
        .unwrap();
    Message::from_vec(&buf[..len]).unwrap()
}

fn answer_v4(message: &Message) -> Option<Ipv4Addr> {
    message.answers().iter().find_map(|r| match r.data() {
        RData::A(a) => Some(a.0),
        _ => None,
    })
}

// ============================================================================
// Sinkhole and passthrough flows
// ============================================================================

#[tokio::test]
async fn blocked_domain_gets_sinkhole_answer() {
    let resolver = start_resolver().await;

    // Mixed case and trailing root dot normalize away.
    let query = build_query("Malicious-Example.TEST.", RecordType::A, 0x4242);
    let reply = exchange(resolver.addr, &query).await;

    assert_eq!(reply.id(), 0x4242);
    assert_eq!(reply.message_type(), MessageType::Response);
    assert_eq!(answer_v4(&reply), Some(Ipv4Addr::UNSPECIFIED));
}

#[tokio::test]
async fn allowed_domain_gets_empty_answer() {
    let resolver = start_resolver().await;

    let query = build_query("safe-example.test.", RecordType::A, 0x1111);
    let reply = exchange(resolver.addr, &query).await;

    assert_eq!(reply.id(), 0x1111);
    assert!(reply.answers().is_empty());
}

#[tokio::test]
async fn subdomain_of_blocked_domain_is_sinkholed() {
    let resolver = start_resolver().await;

    let query = build_query("cdn.malicious-example.test.", RecordType::A, 7);
    let reply = exchange(resolver.addr, &query).await;

    assert_eq!(answer_v4(&reply), Some(Ipv4Addr::UNSPECIFIED));
}

// ============================================================================
// Resilience
// ============================================================================

#[tokio::test]
async fn malformed_datagram_does_not_kill_the_loop() {
    let resolver = start_resolver().await;

    // Non-DNS garbage: no reply expected, and the loop must survive.
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket
        .send_to(b"definitely not dns", resolver.addr)
        .await
        .unwrap();

    // A well-formed query right after must still be answered.
    let query = build_query("malicious-example.test.", RecordType::A, 9);
    let reply = exchange(resolver.addr, &query).await;
    assert_eq!(answer_v4(&reply), Some(Ipv4Addr::UNSPECIFIED));
}

// ============================================================================
// Verdict cache
// ============================================================================

#[tokio::test]
async fn repeated_queries_reuse_the_cached_verdict() {
    let resolver = start_resolver().await;

    for id in 0..3u16 {
        let query = build_query("malicious-example.test.", RecordType::A, id);
        let reply = exchange(resolver.addr, &query).await;
        assert_eq!(answer_v4(&reply), Some(Ipv4Addr::UNSPECIFIED));
    }

    assert_eq!(resolver.assessor_calls.load(Ordering::SeqCst), 1);
}
