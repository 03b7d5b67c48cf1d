//! Classification service: verdict cache in front of the assessor.
//!
//! Every inbound surface (DNS resolver loop, HTTP check endpoint)
//! shares one instance of this service; it is the only component that
//! reads or writes the verdict store.

use crate::ports::{ThreatAssessor, VerdictStore};
use dashmap::DashMap;
use sinkhole_dns_domain::config::ClassifierConfig;
use sinkhole_dns_domain::{name, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Policy knobs copied out of [`ClassifierConfig`] at construction.
#[derive(Debug, Clone)]
pub struct ClassificationPolicy {
    /// Maximum age of a cached verdict before re-classification.
    pub cache_ttl_seconds: i64,
    /// Upper bound on a single assessor call.
    pub assessment_timeout: Duration,
    /// Fallback when the assessor fails or times out: true means "not
    /// malicious" (fail-open). Fallback verdicts are never cached.
    pub fail_open: bool,
}

impl ClassificationPolicy {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            cache_ttl_seconds: config.cache_ttl_seconds,
            assessment_timeout: Duration::from_millis(config.assessment_timeout_ms),
            fail_open: config.fail_open,
        }
    }
}

/// Outcome of one classification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Canonical form of the queried name.
    pub domain: String,
    pub is_malicious: bool,
    /// True when the answer came from a fresh cached verdict.
    pub cache_hit: bool,
    /// True when the assessor failed and the fallback policy answered.
    pub degraded: bool,
}

pub struct ClassificationService {
    store: Arc<dyn VerdictStore>,
    assessor: Arc<dyn ThreatAssessor>,
    policy: ClassificationPolicy,
    /// Per-key guard so concurrent misses for the same domain trigger
    /// exactly one assessor call; losers re-check the store under the
    /// lock and take the winner's verdict.
    in_flight: DashMap<String, Arc<Mutex<()>>>,
}

impl ClassificationService {
    pub fn new(
        store: Arc<dyn VerdictStore>,
        assessor: Arc<dyn ThreatAssessor>,
        policy: ClassificationPolicy,
    ) -> Self {
        Self {
            store,
            assessor,
            policy,
            in_flight: DashMap::new(),
        }
    }

    /// Classify a raw query name.
    ///
    /// Normalizes, consults the verdict store, and only on a miss or
    /// expiry invokes the assessor under the configured timeout. Fresh
    /// results are always persisted; fallback results never are.
    /// Infallible by contract: storage and assessor failures degrade
    /// per policy instead of propagating.
    pub async fn classify(&self, raw: &str) -> Classification {
        let domain = name::normalize(raw);

        if let Some(is_malicious) = self.fresh_verdict(&domain).await {
            debug!(domain = %domain, is_malicious, "Verdict cache hit");
            return Classification {
                domain,
                is_malicious,
                cache_hit: true,
                degraded: false,
            };
        }

        let gate = self
            .in_flight
            .entry(domain.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let classification = {
            let _held = gate.lock().await;

            // A concurrent caller may have classified while we waited.
            if let Some(is_malicious) = self.fresh_verdict(&domain).await {
                debug!(domain = %domain, is_malicious, "Verdict cached by concurrent caller");
                Classification {
                    domain: domain.clone(),
                    is_malicious,
                    cache_hit: true,
                    degraded: false,
                }
            } else {
                match self.assess_bounded(&domain).await {
                    Ok(is_malicious) => {
                        let observed_at = chrono::Utc::now().timestamp();
                        if let Err(e) = self.store.put(&domain, is_malicious, observed_at).await {
                            // Transient: the caller still gets the verdict,
                            // the next request re-classifies.
                            warn!(domain = %domain, error = %e, "Failed to persist verdict");
                        }
                        Classification {
                            domain: domain.clone(),
                            is_malicious,
                            cache_hit: false,
                            degraded: false,
                        }
                    }
                    Err(e) => {
                        let is_malicious = !self.policy.fail_open;
                        warn!(
                            domain = %domain,
                            error = %e,
                            fail_open = self.policy.fail_open,
                            "Assessment failed, answering with fallback verdict"
                        );
                        Classification {
                            domain: domain.clone(),
                            is_malicious,
                            cache_hit: false,
                            degraded: true,
                        }
                    }
                }
            }
        };

        // Every exit drops its own gate so the map stays strictly
        // transient; the pointer check keeps a newer gate for the same
        // key (inserted after ours was removed) intact.
        self.in_flight
            .remove_if(&domain, |_, entry| Arc::ptr_eq(entry, &gate));

        classification
    }

    /// Fresh stored verdict for a canonical key, or `None`. Storage
    /// read failures degrade to a miss.
    async fn fresh_verdict(&self, domain: &str) -> Option<bool> {
        let verdict = match self.store.get(domain).await {
            Ok(v) => v?,
            Err(e) => {
                warn!(domain = %domain, error = %e, "Verdict store read failed, treating as miss");
                return None;
            }
        };

        let now = chrono::Utc::now().timestamp();
        if verdict.is_fresh(now, self.policy.cache_ttl_seconds) {
            Some(verdict.is_malicious)
        } else {
            None
        }
    }

    async fn assess_bounded(&self, domain: &str) -> Result<bool, DomainError> {
        match tokio::time::timeout(self.policy.assessment_timeout, self.assessor.assess(domain))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(DomainError::AssessmentTimeout),
        }
    }
}
