use clap::error::ErrorKind;
use clap::Parser;
use serde_json::json;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use run_coach_cli::commands::{report_failure, Cli};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors still produce an error document on stdout
            let message = err.render().to_string();
            println!("{}", json!({ "error": message.trim() }));
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so stdout carries only the output document
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
