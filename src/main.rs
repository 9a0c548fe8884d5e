//! Binary entrypoint for the `gitscan` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Warnings (unreadable directories, missing git) go to stderr so the
    // report on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gitscan=warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    match gitscan::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
