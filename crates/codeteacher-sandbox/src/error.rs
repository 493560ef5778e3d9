//! Sandbox error types.

use thiserror::Error;

/// Errors that can occur while setting up a sandbox.
///
/// Snippet failures are never reported through this type; they are captured
/// as error output lines.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Engine realm setup failed.
    #[error("Sandbox setup failed: {0}")]
    SetupFailed(String),
}

impl SandboxError {
    /// Create a new setup failed error.
    pub fn setup_failed(msg: impl Into<String>) -> Self {
        Self::SetupFailed(msg.into())
    }
}
