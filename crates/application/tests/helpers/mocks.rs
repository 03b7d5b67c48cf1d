#![allow(dead_code)]

use async_trait::async_trait;
use sinkhole_dns_application::ports::{ThreatAssessor, VerdictStore};
use sinkhole_dns_domain::{DomainError, Verdict};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock VerdictStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockVerdictStore {
    entries: Arc<RwLock<HashMap<String, Verdict>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    put_calls: Arc<AtomicUsize>,
}

impl MockVerdictStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, domain: &str, is_malicious: bool, observed_at: i64) {
        self.entries.write().await.insert(
            domain.to_string(),
            Verdict::new(domain, is_malicious, observed_at),
        );
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub async fn stored(&self, domain: &str) -> Option<Verdict> {
        self.entries.read().await.get(domain).cloned()
    }
}

#[async_trait]
impl VerdictStore for MockVerdictStore {
    async fn get(&self, domain: &str) -> Result<Option<Verdict>, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock read failure".to_string()));
        }
        Ok(self.entries.read().await.get(domain).cloned())
    }

    async fn put(
        &self,
        domain: &str,
        is_malicious: bool,
        observed_at: i64,
    ) -> Result<(), DomainError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock write failure".to_string()));
        }
        self.entries.write().await.insert(
            domain.to_string(),
            Verdict::new(domain, is_malicious, observed_at),
        );
        Ok(())
    }
}

// ============================================================================
// Mock ThreatAssessor
// ============================================================================

pub struct MockAssessor {
    verdict: bool,
    calls: Arc<AtomicUsize>,
    fail: AtomicBool,
    delay: Option<Duration>,
}

impl MockAssessor {
    pub fn returning(verdict: bool) -> Self {
        Self {
            verdict,
            calls: Arc::new(AtomicUsize::new(0)),
            fail: AtomicBool::new(false),
            delay: None,
        }
    }

    pub fn failing() -> Self {
        let assessor = Self::returning(false);
        assessor.fail.store(true, Ordering::SeqCst);
        assessor
    }

    /// Assessor that sleeps before answering, for timeout tests.
    pub fn slow(verdict: bool, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::returning(verdict)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ThreatAssessor for MockAssessor {
    async fn assess(&self, _domain: &str) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::AssessmentFailed(
                "mock assessor failure".to_string(),
            ));
        }
        Ok(self.verdict)
    }
}
