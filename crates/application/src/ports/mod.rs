pub mod threat_assessor;
pub mod verdict_store;

pub use threat_assessor::ThreatAssessor;
pub use verdict_store::VerdictStore;
