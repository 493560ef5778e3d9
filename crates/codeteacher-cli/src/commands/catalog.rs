//! Catalog inspection.

use clap::Args;
use codeteacher_core::catalog::LanguageCatalog;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

/// Catalog command arguments.
#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog file (JSON5)
    pub file: PathBuf,

    /// Show the topics of one language
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs) -> anyhow::Result<ExitCode> {
    let catalog = LanguageCatalog::load(&args.file)?;

    match args.language {
        Some(key) => {
            let language = catalog.language(&key)?;
            println!("{}", style(&language.name).bold());
            for topic in &language.topics {
                println!("  {}", topic.title);
            }
        }
        None => {
            for (key, name) in catalog.languages() {
                println!("  {:<16} {}", style(key).cyan(), name);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
