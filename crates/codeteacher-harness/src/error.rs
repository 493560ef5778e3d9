//! Harness error types.

use thiserror::Error;

/// Errors that stop a harness run before every check has a response.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// HTTP client could not be built.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No response within the request timeout.
    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    /// Connection or protocol failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HarnessError {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Map a reqwest failure, keeping timeouts distinct.
    pub(crate) fn from_request(err: reqwest::Error, url: &str, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout_ms,
            }
        } else {
            Self::Network(err)
        }
    }

    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
