use serde::{Deserialize, Serialize};

/// Sinkhole answer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// IPv4 address returned for blocked A queries (default: "0.0.0.0")
    #[serde(default = "default_sinkhole_v4")]
    pub sinkhole_address: String,

    /// IPv6 address returned for blocked AAAA queries (default: "::")
    #[serde(default = "default_sinkhole_v6")]
    pub sinkhole_address_v6: String,

    /// TTL on sinkhole answer records, in seconds (default: 60).
    /// Distinct from the verdict cache TTL.
    #[serde(default = "default_response_ttl")]
    pub response_ttl: u32,
}

fn default_sinkhole_v4() -> String {
    "0.0.0.0".to_string()
}

fn default_sinkhole_v6() -> String {
    "::".to_string()
}

fn default_response_ttl() -> u32 {
    60
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            sinkhole_address: default_sinkhole_v4(),
            sinkhole_address_v6: default_sinkhole_v6(),
            response_ttl: default_response_ttl(),
        }
    }
}
