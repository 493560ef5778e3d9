//! The practice terminal: an editable snippet, a run trigger, and accumulated output.

use crate::executor::ScriptExecutor;
use crate::limits::ExecutionLimits;
use crate::output::{OutputLine, OutputLog};
use crate::Result;
use codeteacher_core::config::{TerminalConfig, EXECUTABLE_LANGUAGES};
use std::collections::BTreeSet;
use tracing::debug;

/// Heading shown above a terminal that can run the selected language.
pub const TERMINAL_TITLE: &str = "JavaScript Practice Terminal";

/// Heading shown when the selected language cannot be run.
pub const PLAYGROUND_TITLE: &str = "Code Playground";

/// Notice shown instead of the editor for unsupported languages.
pub const UNSUPPORTED_NOTICE: &str =
    "Interactive practice is currently available for JavaScript lessons only.";

/// Shown while the output is empty.
pub const OUTPUT_PLACEHOLDER: &str = "Output will appear here...";

/// Result of pressing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The snippet ran and appended this many lines.
    Executed { appended: usize },

    /// The selected language has no executor; nothing ran.
    Unsupported { language: String },
}

/// A practice session for one learner.
pub struct PracticeTerminal {
    supported: BTreeSet<String>,
    language: String,
    snippet: String,
    output: OutputLog,
    executor: ScriptExecutor,
}

impl PracticeTerminal {
    /// Create a terminal from configuration.
    ///
    /// Configured languages the executor cannot run are dropped.
    pub fn new(config: &TerminalConfig) -> Result<Self> {
        let supported = config
            .supported_languages
            .iter()
            .filter(|language| EXECUTABLE_LANGUAGES.contains(&language.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            supported,
            language: config.default_language.clone(),
            snippet: config.initial_snippet.clone(),
            output: OutputLog::new(),
            executor: ScriptExecutor::new(ExecutionLimits::from(config))?,
        })
    }

    /// Select the lesson language. Output and snippet are kept.
    pub fn select_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the selected language can be executed.
    pub fn is_supported(&self) -> bool {
        self.supported.contains(&self.language)
    }

    /// Languages this terminal executes.
    pub fn supported_languages(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Replace the snippet wholesale.
    pub fn set_snippet(&mut self, snippet: impl Into<String>) {
        self.snippet = snippet.into();
    }

    /// Run the current snippet and append its output.
    ///
    /// For an unsupported language nothing is executed and the output is left
    /// untouched.
    pub fn run(&mut self) -> RunOutcome {
        if !self.is_supported() {
            debug!(language = %self.language, "Run skipped for unsupported language");
            return RunOutcome::Unsupported {
                language: self.language.clone(),
            };
        }

        let lines = self.executor.execute(&self.snippet);
        let appended = lines.len();
        self.output.extend(lines);
        RunOutcome::Executed { appended }
    }

    /// Empty the output. The snippet is not affected.
    pub fn clear(&mut self) {
        self.output.clear();
    }

    pub fn output(&self) -> &[OutputLine] {
        self.output.lines()
    }

    pub fn output_log(&self) -> &OutputLog {
        &self.output
    }

    /// Heading for the current language.
    pub fn title(&self) -> &'static str {
        if self.is_supported() {
            TERMINAL_TITLE
        } else {
            PLAYGROUND_TITLE
        }
    }
}
