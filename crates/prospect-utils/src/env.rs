//! Environment variable helpers
//!
//! Credential and endpoint configuration across the workspace is loaded from
//! the process environment. These helpers give a uniform error for missing
//! required variables instead of a bare `VarError`.

use thiserror::Error;

/// Error raised when a required environment variable is absent or unreadable
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required environment variable {0} is not set")]
    Missing(String),

    #[error("environment variable {0} contains invalid unicode")]
    InvalidUnicode(String),
}

/// Read a required environment variable
pub fn required_env(name: &str) -> Result<String, EnvError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(std::env::VarError::NotPresent) => Err(EnvError::Missing(name.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => Err(EnvError::InvalidUnicode(name.to_string())),
    }
}

/// Read an optional environment variable, falling back to a default
pub fn optional_env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
