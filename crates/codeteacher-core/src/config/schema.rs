//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Default base URL of the remote execution proxy.
pub const DEFAULT_PROXY_URL: &str = "http://localhost:4000";

/// Default per-request timeout for the integration harness.
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Languages the embedded executor can run.
pub const EXECUTABLE_LANGUAGES: &[&str] = &["javascript"];

/// Main CodeTeacher configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Practice terminal settings.
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Integration harness settings.
    #[serde(default)]
    pub harness: HarnessConfig,
}

/// Practice terminal configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Languages the terminal will execute.
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,

    /// Language selected when a terminal is created.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Snippet shown in a fresh terminal.
    #[serde(default = "default_initial_snippet")]
    pub initial_snippet: String,

    /// Maximum loop iterations per run. Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_iteration_limit: Option<u64>,

    /// Maximum call depth per run. Engine default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursion_limit: Option<usize>,
}

fn default_supported_languages() -> Vec<String> {
    vec!["javascript".to_string()]
}

fn default_language() -> String {
    "javascript".to_string()
}

fn default_initial_snippet() -> String {
    "// Type your JavaScript code here!\nconsole.log(\"Hello, Teacher!\");".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            supported_languages: default_supported_languages(),
            default_language: default_language(),
            initial_snippet: default_initial_snippet(),
            loop_iteration_limit: None,
            recursion_limit: None,
        }
    }
}

/// Integration harness configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base URL of the execution proxy.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Checks to run, in order.
    #[serde(default = "default_checks")]
    pub checks: Vec<CheckConfig>,
}

fn default_base_url() -> String {
    DEFAULT_PROXY_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_checks() -> Vec<CheckConfig> {
    vec![
        CheckConfig::new("javascript", r#"console.log("hello from js")"#, "hello from js")
            .with_label("JS"),
        CheckConfig::new("python", r#"print("hello from py")"#, "hello from py")
            .with_label("PY"),
    ]
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            checks: default_checks(),
        }
    }
}

/// One submission to the execution proxy and the text its response must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Language key sent to the proxy.
    pub language: String,

    /// Source code sent to the proxy.
    pub code: String,

    /// Substring the response body must contain.
    pub expect: String,

    /// Short name used in the transcript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CheckConfig {
    /// Create a new check.
    pub fn new(
        language: impl Into<String>,
        code: impl Into<String>,
        expect: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            expect: expect.into(),
            label: None,
        }
    }

    /// Set the transcript label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Transcript label, falling back to the upper-cased language key.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.language.to_uppercase())
    }
}
