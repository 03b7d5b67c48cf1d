use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CheckResponse {
    /// "blocked" or "allowed"
    pub status: &'static str,
    /// Canonical form of the checked domain
    pub url: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
