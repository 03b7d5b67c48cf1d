//! DNS wire format handling via `hickory-proto`.
//!
//! Parses incoming query datagrams and builds the correlated reply:
//! a sinkhole address record for blocked domains, an empty answer
//! section otherwise. This resolver never forwards upstream, so an
//! allowed reply carries no addresses — a known limitation of the
//! filtering profile.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use sinkhole_dns_domain::config::DnsConfig;
use sinkhole_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Standard DNS message ceiling for this profile (no EDNS0).
pub const MAX_MESSAGE_SIZE: usize = 512;

/// Sinkhole answer settings resolved from [`DnsConfig`] at startup so
/// the hot path never re-parses address strings.
#[derive(Debug, Clone)]
pub struct SinkholePolicy {
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
    /// TTL on answer records; distinct from the verdict cache TTL.
    pub response_ttl: u32,
}

impl SinkholePolicy {
    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let ipv4 = config
            .sinkhole_address
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(config.sinkhole_address.clone()))?;
        let ipv6 = config
            .sinkhole_address_v6
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(config.sinkhole_address_v6.clone()))?;
        Ok(Self {
            ipv4,
            ipv6,
            response_ttl: config.response_ttl,
        })
    }
}

/// The parts of an inbound query the resolver loop needs: correlation
/// id, the raw queried name, and the question to echo back.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    pub id: u16,
    /// First question name as received (normalization happens in the
    /// classification service).
    pub name: String,
    pub record_type: RecordType,
    pub recursion_desired: bool,
    question: Query,
}

/// Decode one datagram as a DNS query with at least one question.
pub fn parse_query(bytes: &[u8]) -> Result<ParsedQuery, DomainError> {
    let message = Message::from_vec(bytes)
        .map_err(|e| DomainError::InvalidDnsMessage(format!("failed to parse query: {e}")))?;

    if message.message_type() != MessageType::Query {
        return Err(DomainError::InvalidDnsMessage(
            "not a query message".to_string(),
        ));
    }

    let question = message
        .queries()
        .first()
        .ok_or_else(|| DomainError::InvalidDnsMessage("empty question section".to_string()))?
        .clone();

    Ok(ParsedQuery {
        id: message.id(),
        name: question.name().to_utf8(),
        record_type: question.query_type(),
        recursion_desired: message.recursion_desired(),
        question,
    })
}

/// Build the reply datagram correlated to `query` (same id, echoed
/// question). Blocked address-class queries get one sinkhole answer;
/// everything else gets an empty NoError answer section.
pub fn build_reply(
    query: &ParsedQuery,
    blocked: bool,
    policy: &SinkholePolicy,
) -> Result<Vec<u8>, DomainError> {
    let mut message = Message::new(query.id, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(query.recursion_desired);
    message.set_response_code(ResponseCode::NoError);
    message.add_query(query.question.clone());

    if blocked {
        let rdata = match query.record_type {
            RecordType::A => Some(RData::A(A(policy.ipv4))),
            RecordType::AAAA => Some(RData::AAAA(AAAA(policy.ipv6))),
            _ => None,
        };
        if let Some(rdata) = rdata {
            message.add_answer(Record::from_rdata(
                query.question.name().clone(),
                policy.response_ttl,
                rdata,
            ));
        }
    }

    serialize(&message)
}

fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(MAX_MESSAGE_SIZE);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDnsMessage(format!("failed to serialize reply: {e}")))?;
    Ok(buf)
}
