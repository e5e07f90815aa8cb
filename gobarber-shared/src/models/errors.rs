use serde::{Deserialize, Serialize};

/// Error body returned by the GoBarber API, e.g.
/// `{ "status": "error", "message": "Incorrect email/password combination." }`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error class reported by the API, `"error"` for every known failure.
    #[serde(default = "default_status")]
    pub status: String,
    /// Human readable error message.
    pub message: String,
}

fn default_status() -> String {
    "error".to_string()
}

impl ErrorResponse {
    /// Creates a new error response with the default `"error"` status.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: default_status(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorResponse {}
