//! Sinkhole DNS Application Layer
//!
//! Ports (capability traits implemented by the infrastructure layer)
//! and the classification service that every inbound surface shares.

pub mod ports;
pub mod services;

pub use services::{Classification, ClassificationPolicy, ClassificationService};
