//! Sequential check runner and its transcript.

use crate::client::{ExecutionResult, RunClient};
use crate::{Result, EXIT_CHECK_FAILED, EXIT_PASSED};
use codeteacher_core::config::CheckConfig;
use tracing::{info, warn};

/// First transcript line.
pub const STARTED: &str = "Integration runner started";

/// Last transcript line when every check passed.
pub const ALL_PASSED: &str = "All integration checks passed";

/// Last transcript line when any check failed.
pub const SOME_FAILED: &str = "One or more checks failed";

/// A check together with the response it got.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub check: CheckConfig,
    pub result: ExecutionResult,
}

impl CheckOutcome {
    pub fn ok(&self) -> bool {
        self.result.matches(&self.check.expect)
    }
}

/// Outcomes of a completed run, in submission order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::ok)
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            EXIT_PASSED
        } else {
            EXIT_CHECK_FAILED
        }
    }

    /// Human-readable transcript lines.
    ///
    /// Statuses and bodies come first for every check, then the verdict of
    /// every check, then the overall verdict.
    pub fn transcript(&self) -> Vec<String> {
        let mut lines = vec![STARTED.to_string()];

        for outcome in &self.outcomes {
            let label = outcome.check.display_label();
            lines.push(format!("{} status: {}", label, outcome.result.status));
            lines.push(format!("{} body: {}", label, outcome.result.body));
        }
        for outcome in &self.outcomes {
            lines.push(format!("{} OK: {}", outcome.check.display_label(), outcome.ok()));
        }

        lines.push(if self.passed() { ALL_PASSED } else { SOME_FAILED }.to_string());
        lines
    }
}

/// Run every check in order, one request at a time.
///
/// Returns early with the first transport error; checks after it are not sent.
pub async fn run_checks(client: &RunClient, checks: &[CheckConfig]) -> Result<Report> {
    let mut report = Report::default();

    for check in checks {
        let result = client.post_run(&check.language, &check.code).await?;
        let outcome = CheckOutcome {
            check: check.clone(),
            result,
        };

        if outcome.ok() {
            info!(language = %check.language, "Check passed");
        } else {
            warn!(
                language = %check.language,
                status = outcome.result.status,
                expected = %check.expect,
                "Check failed"
            );
        }
        report.outcomes.push(outcome);
    }

    Ok(report)
}
