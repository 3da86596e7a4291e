//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Regenerate AI-tool configuration files from the canonical instructions
/// document and the rule topic files.
#[derive(Parser, Debug)]
#[command(name = "rules-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing the canonical document
    #[arg(short, long, env = "RULES_SYNC_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to rules-sync.toml in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render everything and list the files that would be written
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit non-zero if any generated file is missing or out of date
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
