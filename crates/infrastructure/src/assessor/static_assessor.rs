use async_trait::async_trait;
use sinkhole_dns_application::ports::ThreatAssessor;
use sinkhole_dns_domain::DomainError;
use tracing::debug;

/// Assessor that returns the same verdict for every domain.
///
/// With `verdict = true` this turns the resolver into a pure sinkhole,
/// useful for captive setups and for exercising the blocked path.
pub struct StaticAssessor {
    verdict: bool,
}

impl StaticAssessor {
    pub fn new(verdict: bool) -> Self {
        Self { verdict }
    }
}

#[async_trait]
impl ThreatAssessor for StaticAssessor {
    async fn assess(&self, domain: &str) -> Result<bool, DomainError> {
        debug!(domain = %domain, verdict = self.verdict, "Static assessment");
        Ok(self.verdict)
    }
}
