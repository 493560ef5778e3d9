//! Integration harness for the remote code execution proxy.
//!
//! Each check submits source code for one language to `POST {base}/run` and
//! passes when the proxy answers `200` with a body containing the expected
//! text. Checks run one at a time; the first transport failure aborts the run.

pub mod client;
pub mod error;
pub mod runner;

pub use client::{ExecutionResult, RunClient};
pub use error::HarnessError;
pub use runner::{run_checks, CheckOutcome, Report};

/// Exit status when every check passed.
pub const EXIT_PASSED: u8 = 0;

/// Exit status when at least one check got a non-matching response.
pub const EXIT_CHECK_FAILED: u8 = 2;

/// Exit status when a request failed before a response arrived.
pub const EXIT_RUNNER_ERROR: u8 = 3;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
