use serde::{Deserialize, Serialize};

/// Which built-in assessor backs the classification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessorMode {
    /// Every domain receives the same fixed verdict.
    Static,
    /// Exact and suffix matching against the configured blocklist.
    List,
}

/// Classification and verdict-cache settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Maximum age of a cached verdict before re-classification (default: 3600)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: i64,

    /// Upper bound on a single assessor call (default: 2000)
    #[serde(default = "default_assessment_timeout_ms")]
    pub assessment_timeout_ms: u64,

    /// Fallback when the assessor fails or times out: true treats the
    /// domain as not malicious (fail-open). The fallback is never cached.
    #[serde(default = "default_fail_open")]
    pub fail_open: bool,

    #[serde(default = "default_mode")]
    pub mode: AssessorMode,

    /// Verdict used by the static assessor (default: true, i.e. block)
    #[serde(default = "default_true")]
    pub static_verdict: bool,

    /// Canonical domains blocked by the list assessor; each entry also
    /// blocks its subdomains.
    #[serde(default)]
    pub blocklist: Vec<String>,
}

fn default_cache_ttl() -> i64 {
    3600
}

fn default_assessment_timeout_ms() -> u64 {
    2000
}

fn default_fail_open() -> bool {
    true
}

fn default_mode() -> AssessorMode {
    AssessorMode::Static
}

fn default_true() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: default_cache_ttl(),
            assessment_timeout_ms: default_assessment_timeout_ms(),
            fail_open: default_fail_open(),
            mode: default_mode(),
            static_verdict: default_true(),
            blocklist: Vec::new(),
        }
    }
}
