use async_trait::async_trait;
use sinkhole_dns_domain::{DomainError, Verdict};

/// Application-layer port for the persisted verdict cache.
///
/// Keys are canonical domains; normalization happens before lookup or
/// insert, never on stored data. Freshness is the caller's concern:
/// `get` returns whatever row exists, stale or not.
#[async_trait]
pub trait VerdictStore: Send + Sync {
    /// Look up the stored verdict for an exact canonical key.
    async fn get(&self, domain: &str) -> Result<Option<Verdict>, DomainError>;

    /// Upsert: replace any existing verdict for `domain` with the new
    /// classification and timestamp. Atomic per key; last writer wins.
    async fn put(
        &self,
        domain: &str,
        is_malicious: bool,
        observed_at: i64,
    ) -> Result<(), DomainError>;
}
