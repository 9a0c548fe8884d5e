//! The scan command: inspect a root directory and print the report.

use crate::adapters::live::LiveGitClient;
use crate::cli::Cli;
use crate::inspect;
use crate::ports::git::{GitClient, QueryResult};
use crate::report;

/// Execute the scan described by the parsed CLI arguments.
///
/// # Errors
///
/// Returns an error string when the root path is missing or not a
/// directory, when the root cannot be enumerated, or when JSON
/// serialization fails.
pub fn run(cli: &Cli) -> Result<(), String> {
    if !cli.path.exists() {
        return Err(format!("path '{}' does not exist", cli.path.display()));
    }
    if !cli.path.is_dir() {
        return Err(format!("path '{}' is not a directory", cli.path.display()));
    }

    let git = LiveGitClient;
    let statuses = inspect::scan_root(&git, &cli.path)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&statuses).map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        let (table, summary) = report::render(&statuses, cli.detailed);
        println!("{table}");
        if !summary.is_empty() {
            println!("\n{summary}");
        }
    }

    // The availability probe runs after the scan so per-directory results
    // gathered with a reachable git are never suppressed.
    if !matches!(git.version(), QueryResult::Output(_)) {
        tracing::warn!("git executable not found on PATH; repository data may be incomplete");
    }
    Ok(())
}
