use super::{
    ClassifierConfig, ConfigError, DatabaseConfig, DnsConfig, LoggingConfig, ServerConfig,
};
use crate::name;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Values passed on the command line that take precedence over the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI
    /// overrides. A missing path yields the built-in defaults.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFailed {
                    path: p.to_string(),
                    source: e,
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
                    path: p.to_string(),
                    source: e,
                })?
            }
            None => Self::default(),
        };

        if let Some(port) = overrides.dns_port {
            config.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            config.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            config.database.path = db;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.bind_ip()?;

        // Concrete families: the sinkhole answers are built as A and
        // AAAA rdata, so a mismatched family must fail here rather
        // than at wiring time.
        if self.dns.sinkhole_address.parse::<Ipv4Addr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "sinkhole_address '{}' is not an IPv4 address",
                self.dns.sinkhole_address
            )));
        }
        if self.dns.sinkhole_address_v6.parse::<Ipv6Addr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "sinkhole_address_v6 '{}' is not an IPv6 address",
                self.dns.sinkhole_address_v6
            )));
        }

        if self.classifier.cache_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(
                "cache_ttl_seconds must be positive".to_string(),
            ));
        }
        if self.classifier.assessment_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "assessment_timeout_ms must be positive".to_string(),
            ));
        }

        for entry in &self.classifier.blocklist {
            if entry.is_empty() || !name::is_canonical(entry) {
                return Err(ConfigError::Invalid(format!(
                    "blocklist entry '{entry}' is not a canonical domain"
                )));
            }
        }

        if self.database.path.is_empty() {
            return Err(ConfigError::Invalid("database.path is empty".to_string()));
        }

        Ok(())
    }
}
