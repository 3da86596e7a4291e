//! rules-sync CLI
//!
//! Regenerates the Copilot, Claude and Cursor instruction files from the
//! canonical instructions document.

mod cli;
mod commands;
mod error;
mod logging;

use std::error::Error as _;
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use sync_core::SyncMode;
use sync_fs::NormalizedPath;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(cli.root.as_deref())?;
    tracing::debug!(root = %root, "resolved project root");
    let config = cli.config.as_deref().map(NormalizedPath::new);

    if cli.check {
        commands::run_check(&root, config.as_ref())
    } else {
        let mode = if cli.dry_run {
            SyncMode::DryRun
        } else {
            SyncMode::Write
        };
        commands::run_sync(&root, config.as_ref(), mode)
    }
}

/// The explicit `--root`, or the current directory, canonicalized.
fn resolve_root(explicit: Option<&Path>) -> Result<NormalizedPath> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(NormalizedPath::canonical(root)?)
}

/// Print the error and every underlying cause.
fn report_error(e: &CliError) {
    eprintln!("{}: {}", "error".red().bold(), e);
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}
