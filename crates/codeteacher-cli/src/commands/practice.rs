//! Practice terminal command.

use crate::render::render_terminal;
use clap::Args;
use codeteacher_core::config::Config;
use codeteacher_sandbox::PracticeTerminal;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Practice command arguments.
#[derive(Args)]
pub struct PracticeArgs {
    /// Snippet file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Lesson language (defaults to the configured language)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Print captured lines as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the practice command.
pub fn run(args: PracticeArgs, config: &Config) -> anyhow::Result<ExitCode> {
    config.validate()?;

    let mut terminal = PracticeTerminal::new(&config.terminal)?;
    if let Some(language) = args.language {
        terminal.select_language(language);
    }

    // The editor content is only read for a language the terminal can run.
    if terminal.is_supported() {
        terminal.set_snippet(read_snippet(args.file.as_deref())?);
    }
    terminal.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(terminal.output_log())?);
    } else {
        render_terminal(&terminal);
    }

    Ok(ExitCode::SUCCESS)
}

fn read_snippet(file: Option<&std::path::Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut snippet = String::new();
            std::io::stdin().read_to_string(&mut snippet)?;
            Ok(snippet)
        }
    }
}
