use async_trait::async_trait;
use sinkhole_dns_domain::DomainError;

/// Application-layer port for the threat-intelligence decision.
///
/// The classification service consults this port only on a verdict
/// cache miss or expiry; implementations live in the infrastructure
/// layer and are injected at DI time. An implementation may be a
/// static rule, a blocklist lookup or a remote call — the service
/// bounds each call with its own timeout, so implementations do not
/// need to enforce one.
#[async_trait]
pub trait ThreatAssessor: Send + Sync {
    /// Decide whether `domain` (canonical form) is malicious.
    async fn assess(&self, domain: &str) -> Result<bool, DomainError>;
}
