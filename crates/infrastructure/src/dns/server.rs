//! UDP resolver loop.
//!
//! One sequential receive-classify-respond cycle; each datagram is
//! handled to completion before the next is read. Per-request errors
//! (malformed packet, storage failure, send failure) are contained and
//! logged — nothing short of the initial bind takes the loop down.

use super::wire::{self, SinkholePolicy, MAX_MESSAGE_SIZE};
use sinkhole_dns_application::ClassificationService;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

pub struct DnsServer {
    socket: UdpSocket,
    classifier: Arc<ClassificationService>,
    policy: SinkholePolicy,
}

impl DnsServer {
    /// Bind the listener. A failure here is fatal: the process cannot
    /// serve without the socket.
    pub async fn bind(
        addr: SocketAddr,
        classifier: Arc<ClassificationService>,
        policy: SinkholePolicy,
    ) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!(bind_address = %addr, protocol = "UDP", "DNS server listening");
        Ok(Self {
            socket,
            classifier,
            policy,
        })
    }

    /// Actual bound address; useful when binding port 0 in tests.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serve forever. Receive blocks indefinitely by design — absence
    /// of traffic is not an error.
    pub async fn run(self) -> io::Result<()> {
        let mut buf = [0u8; MAX_MESSAGE_SIZE];
        loop {
            let (len, src) = match self.socket.recv_from(&mut buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP receive failed");
                    continue;
                }
            };
            self.handle_datagram(&buf[..len], src).await;
        }
    }

    async fn handle_datagram(&self, bytes: &[u8], src: SocketAddr) {
        let query = match wire::parse_query(bytes) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %src, error = %e, "Dropping malformed datagram");
                return;
            }
        };

        let classification = self.classifier.classify(&query.name).await;
        info!(
            domain = %classification.domain,
            client = %src,
            record_type = %query.record_type,
            blocked = classification.is_malicious,
            cache_hit = classification.cache_hit,
            "Query handled"
        );

        let reply = match wire::build_reply(&query, classification.is_malicious, &self.policy) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(client = %src, error = %e, "Failed to build reply");
                return;
            }
        };

        match self.socket.send_to(&reply, src).await {
            Ok(sent) => debug!(client = %src, bytes = sent, "Reply sent"),
            Err(e) => warn!(client = %src, error = %e, "Failed to send reply"),
        }
    }
}
