use serde::{Deserialize, Serialize};

/// Database configuration for the verdict store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./sinkhole-dns.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Busy timeout for concurrent access, in seconds (default: 5)
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_seconds: default_busy_timeout(),
        }
    }
}

fn default_db_path() -> String {
    "./sinkhole-dns.db".to_string()
}

fn default_busy_timeout() -> u64 {
    5
}
