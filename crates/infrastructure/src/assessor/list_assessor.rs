use async_trait::async_trait;
use sinkhole_dns_application::ports::ThreatAssessor;
use sinkhole_dns_domain::DomainError;
use std::collections::HashSet;
use tracing::debug;

/// Assessor backed by a fixed set of canonical domains.
///
/// An entry blocks itself and every subdomain: `ads.example.com`
/// matches `ads.example.com` and `tracker.ads.example.com` but not
/// `example.com`.
pub struct ListAssessor {
    entries: HashSet<String>,
}

impl ListAssessor {
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Walk the label chain from the full name up to the registrable
    /// parent, checking each suffix against the set.
    fn is_listed(&self, domain: &str) -> bool {
        let mut candidate = domain;
        loop {
            if self.entries.contains(candidate) {
                return true;
            }
            match candidate.split_once('.') {
                Some((_, parent)) if !parent.is_empty() => candidate = parent,
                _ => return false,
            }
        }
    }
}

#[async_trait]
impl ThreatAssessor for ListAssessor {
    async fn assess(&self, domain: &str) -> Result<bool, DomainError> {
        let listed = self.is_listed(domain);
        debug!(domain = %domain, listed, "List assessment");
        Ok(listed)
    }
}
