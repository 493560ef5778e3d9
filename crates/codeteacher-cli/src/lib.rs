//! CodeTeacher command-line interface.

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};
use codeteacher_core::config::Config;
use std::path::Path;
use std::process::ExitCode;

/// CodeTeacher - coding lessons with a practice terminal
#[derive(Parser)]
#[command(name = "codeteacher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = "CODETEACHER_CONFIG", global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a snippet in the practice terminal
    Practice(commands::practice::PracticeArgs),

    /// Run integration checks against the execution proxy
    Check(commands::check::CheckArgs),

    /// List catalog languages and topics
    Catalog(commands::catalog::CatalogArgs),

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli.config;
    match cli.command {
        Commands::Practice(args) => {
            let config = load_config(config_path.as_deref())?;
            commands::practice::run(args, &config)
        }
        Commands::Check(args) => {
            let config = load_config(config_path.as_deref())?;
            commands::check::run(args, config).await
        }
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Version => {
            println!("codeteacher {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(path)?;
    config.apply_env_overrides();
    Ok(config)
}
