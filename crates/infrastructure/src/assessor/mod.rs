//! Built-in [`ThreatAssessor`] implementations.
//!
//! Selected by `classifier.mode` at DI time; any other implementation
//! (remote feed, scoring model) plugs in through the same port.

pub mod list_assessor;
pub mod static_assessor;

pub use list_assessor::ListAssessor;
pub use static_assessor::StaticAssessor;

use sinkhole_dns_application::ports::ThreatAssessor;
use sinkhole_dns_domain::config::{AssessorMode, ClassifierConfig};
use std::sync::Arc;

pub fn from_config(config: &ClassifierConfig) -> Arc<dyn ThreatAssessor> {
    match config.mode {
        AssessorMode::Static => Arc::new(StaticAssessor::new(config.static_verdict)),
        AssessorMode::List => Arc::new(ListAssessor::new(config.blocklist.iter().cloned())),
    }
}
