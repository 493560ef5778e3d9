//! Sandboxed snippet execution for the CodeTeacher practice terminal.
//!
//! Snippets run inside an embedded JavaScript engine with no access to host
//! state. Everything a snippet writes through `console.log` while it runs is
//! captured as [`OutputLine`]s; failures become a single error line instead of
//! propagating to the caller.

mod console;
pub mod error;
pub mod executor;
pub mod limits;
pub mod output;
pub mod terminal;

pub use error::SandboxError;
pub use executor::ScriptExecutor;
pub use limits::ExecutionLimits;
pub use output::{OutputLine, OutputLog};
pub use terminal::{PracticeTerminal, RunOutcome};

/// Result type for sandbox operations.
pub type Result<T> = std::result::Result<T, SandboxError>;
