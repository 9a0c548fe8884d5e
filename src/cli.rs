//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `gitscan`.
#[derive(Debug, Parser)]
#[command(
    name = "gitscan",
    version,
    about = "Scan a directory for git repositories and report their status"
)]
pub struct Cli {
    /// Directory to scan for git repositories.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show every repository, including commit totals, status summary, and
    /// remote URL.
    #[arg(long)]
    pub detailed: bool,

    /// Emit all repository records as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
