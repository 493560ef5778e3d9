//! Captured program output.

use serde::{Deserialize, Serialize};

/// Text used when a snippet throws something that is not an Error object.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// One captured unit of program output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Rendered text.
    pub text: String,

    /// Whether the line reports a failure.
    pub is_error: bool,
}

impl OutputLine {
    /// A line written by the snippet.
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// A line reporting a failure.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Output accumulated across runs.
///
/// Lines are only ever appended; the log shrinks only through [`OutputLog::clear`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the lines of one run after everything already captured.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.lines.extend(lines);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of error lines.
    pub fn error_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_error).count()
    }
}
