//! Core library entry for the `gitscan` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod inspect;
pub mod ports;
pub mod report;
pub mod status;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed; they surface from
/// clap as errors and must not be treated as failures.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the scan fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::scan::run(&cli)
}
