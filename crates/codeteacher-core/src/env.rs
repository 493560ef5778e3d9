//! Environment variable handling.

use std::env;

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Common environment variable names.
pub mod vars {
    /// Base URL of the remote execution proxy.
    pub const VPT_PROXY_URL: &str = "VPT_PROXY_URL";

    /// CodeTeacher config file override.
    pub const CODETEACHER_CONFIG: &str = "CODETEACHER_CONFIG";
}
