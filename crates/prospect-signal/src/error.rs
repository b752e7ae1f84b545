//! Error types for sector signal operations

use thiserror::Error;

/// Sector signal specific errors
///
/// Only `Config` and `Auth` abort a sector run. `Api`, `Network`, and
/// `Json` are recovered per source/keyword pair inside the fetcher; they
/// surface here when a caller invokes a client method directly.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Configuration error (missing credentials, invalid weights)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication with the upstream API failed; retrying cannot succeed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Upstream API returned a non-success status
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed response payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for signal operations
pub type Result<T> = std::result::Result<T, SignalError>;

impl SignalError {
    /// Whether the error is fatal for the whole sector run
    ///
    /// Non-fatal errors are skipped per source/keyword pair; fatal ones
    /// (credentials) propagate immediately since no data can ever arrive.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SignalError::Config(_) | SignalError::Auth(_))
    }
}

impl From<prospect_utils::EnvError> for SignalError {
    fn from(err: prospect_utils::EnvError) -> Self {
        SignalError::Config(err.to_string())
    }
}
