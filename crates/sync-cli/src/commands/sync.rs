//! Sync and check command implementations

use colored::Colorize;

use sync_core::{CheckStatus, DriftItem, SyncEngine, SyncMode, SyncReport};
use sync_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run a sync (or dry run) and print one line per output.
pub fn run_sync(
    root: &NormalizedPath,
    config: Option<&NormalizedPath>,
    mode: SyncMode,
) -> Result<()> {
    let engine = SyncEngine::from_root(root.clone(), config)?;

    println!(
        "{} Syncing rules from {}...",
        "=>".blue().bold(),
        engine.config().canonical.cyan()
    );

    let report = engine.sync(mode)?;
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::WriteFailed {
            count: report.failures.len(),
        })
    }
}

fn print_report(report: &SyncReport) {
    for name in &report.skipped_topics {
        println!("   {} skipped topic {} (file not readable)", "-".yellow(), name.yellow());
    }

    let verb = match report.mode {
        SyncMode::Write => "wrote",
        SyncMode::DryRun => "would write",
    };
    for path in &report.written {
        println!("   {} {} {}", "+".green(), verb, path);
    }

    for failure in &report.failures {
        println!(
            "   {} {} ({}): {}",
            "!".red(),
            failure.path.cyan(),
            failure.target.dimmed(),
            failure.message
        );
    }

    println!();
    match (report.mode, report.is_success()) {
        (SyncMode::DryRun, _) => println!(
            "{} Dry run: {} file(s) would be written (version {}).",
            "OK".green().bold(),
            report.written.len(),
            report.metadata.version
        ),
        (SyncMode::Write, true) => println!(
            "{} Synced {} file(s) (version {}).",
            "OK".green().bold(),
            report.written.len(),
            report.metadata.version
        ),
        (SyncMode::Write, false) => println!(
            "{} Synced {} file(s), {} failed.",
            "PARTIAL".red().bold(),
            report.written.len(),
            report.failures.len()
        ),
    }
}

/// Compare generated files with a fresh render.
pub fn run_check(root: &NormalizedPath, config: Option<&NormalizedPath>) -> Result<()> {
    println!("{} Checking generated rule files...", "=>".blue().bold());

    let engine = SyncEngine::from_root(root.clone(), config)?;
    let report = engine.check()?;

    for name in &report.skipped_topics {
        println!("   {} skipped topic {} (file not readable)", "-".yellow(), name.yellow());
    }

    match report.status {
        CheckStatus::Healthy => {
            println!(
                "{} All {} generated file(s) are up to date.",
                "OK".green().bold(),
                report.fresh
            );
            Ok(())
        }
        CheckStatus::Missing | CheckStatus::Drifted => {
            print_items("DRIFTED".red().bold(), "!", &report.drifted);
            print_items("MISSING".yellow().bold(), "-", &report.missing);
            println!();
            println!("Run {} to regenerate.", "rules-sync".cyan());
            Err(CliError::OutOfDate {
                count: report.drifted.len() + report.missing.len(),
            })
        }
    }
}

fn print_items(label: colored::ColoredString, bullet: &str, items: &[DriftItem]) {
    if items.is_empty() {
        return;
    }
    println!("{} {} file(s):", label, items.len());
    for item in items {
        println!("   {} {} ({})", bullet, item.file.cyan(), item.target.dimmed());
    }
}
