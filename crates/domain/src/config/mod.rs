//! Configuration module for Sinkhole DNS
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration, loading and CLI overrides
//! - `server`: listener ports and binding
//! - `dns`: sinkhole answer settings
//! - `classifier`: cache TTL, assessor selection and fallback policy
//! - `logging`: logging settings
//! - `database`: verdict store configuration
//! - `errors`: configuration errors

pub mod classifier;
pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use classifier::{AssessorMode, ClassifierConfig};
pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
