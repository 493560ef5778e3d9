//! Integration checks against the remote execution proxy.

use clap::Args;
use codeteacher_core::config::Config;
use codeteacher_harness::{run_checks, Report, RunClient, EXIT_RUNNER_ERROR};
use std::process::ExitCode;
use tracing::debug;

/// Check command arguments.
#[derive(Args)]
pub struct CheckArgs {
    /// Proxy base URL (overrides VPT_PROXY_URL and the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Run the check command.
///
/// Exits 0 when every check passes, 2 when any check fails, and 3 when the
/// run fails before every response arrived, including an unusable proxy URL.
pub async fn run(args: CheckArgs, mut config: Config) -> anyhow::Result<ExitCode> {
    if let Some(base_url) = args.base_url {
        config.harness.base_url = base_url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.harness.timeout_ms = timeout_ms;
    }

    match execute(&config).await {
        Ok(report) => {
            println!("{}", report.transcript().join("\n"));
            Ok(ExitCode::from(report.exit_code()))
        }
        Err(e) => {
            eprintln!("Integration runner error {}", e);
            Ok(ExitCode::from(EXIT_RUNNER_ERROR))
        }
    }
}

async fn execute(config: &Config) -> anyhow::Result<Report> {
    config.validate()?;

    debug!(
        base_url = %config.harness.base_url,
        checks = config.harness.checks.len(),
        "Starting integration checks"
    );

    let client = RunClient::from_config(&config.harness)?;
    Ok(run_checks(&client, &config.harness.checks).await?)
}
