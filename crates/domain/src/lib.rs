//! Sinkhole DNS Domain Layer
pub mod config;
pub mod errors;
pub mod name;
pub mod verdict;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use name::normalize;
pub use verdict::Verdict;
