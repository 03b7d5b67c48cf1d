/// A persisted classification verdict for one canonical domain.
///
/// `domain` is always stored in canonical form (lowercase, no trailing
/// root dot); callers normalize before lookup or insert, never after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub domain: String,
    pub is_malicious: bool,
    /// Unix seconds at which the classification was observed.
    pub observed_at: i64,
}

impl Verdict {
    pub fn new(domain: impl Into<String>, is_malicious: bool, observed_at: i64) -> Self {
        Self {
            domain: domain.into(),
            is_malicious,
            observed_at,
        }
    }

    /// A verdict is fresh while `now - observed_at < ttl_seconds`.
    /// Stale verdicts are treated as absent on read and overwritten by
    /// the next successful classification.
    pub fn is_fresh(&self, now: i64, ttl_seconds: i64) -> bool {
        now - self.observed_at < ttl_seconds
    }
}
