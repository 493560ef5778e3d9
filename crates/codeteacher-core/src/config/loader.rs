//! Configuration loading and persistence.

use super::{Config, EXECUTABLE_LANGUAGES};
use crate::env::{self, vars};
use crate::error::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer, so we use serde_json with pretty print
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = env::get_var(vars::VPT_PROXY_URL) {
            debug!("Proxy base URL overridden from {}", vars::VPT_PROXY_URL);
            self.harness.base_url = url;
        }
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // 1. Terminal languages
        if self.terminal.default_language.trim().is_empty() {
            errors.push("Terminal default_language cannot be empty".to_string());
        }
        for (i, language) in self.terminal.supported_languages.iter().enumerate() {
            if language.trim().is_empty() {
                errors.push(format!("Terminal supported_languages[{}] is empty", i));
            } else if !EXECUTABLE_LANGUAGES.contains(&language.as_str()) {
                errors.push(format!(
                    "Terminal supported_languages[{}]: '{}' cannot be executed (available: {})",
                    i,
                    language,
                    EXECUTABLE_LANGUAGES.join(", ")
                ));
            }
        }
        if self.terminal.loop_iteration_limit == Some(0) {
            errors.push("Terminal loop_iteration_limit must be greater than 0".to_string());
        }
        if self.terminal.recursion_limit == Some(0) {
            errors.push("Terminal recursion_limit must be greater than 0".to_string());
        }

        // 2. Proxy base URL must be http(s)
        match url::Url::parse(&self.harness.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "Harness base_url must use http or https, got '{}'",
                url.scheme()
            )),
            Err(e) => errors.push(format!(
                "Harness base_url '{}' is not a valid URL: {}",
                self.harness.base_url, e
            )),
        }

        // 3. Timeout
        if self.harness.timeout_ms == 0 {
            errors.push("Harness timeout_ms must be greater than 0".to_string());
        }

        // 4. Checks
        if self.harness.checks.is_empty() {
            errors.push("Harness must define at least one check".to_string());
        }
        for (i, check) in self.harness.checks.iter().enumerate() {
            if check.language.trim().is_empty() {
                errors.push(format!("Harness check [{}]: language must not be empty", i));
            }
            if check.expect.is_empty() {
                errors.push(format!("Harness check [{}]: expect must not be empty", i));
            }
        }

        // Return collected errors
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
