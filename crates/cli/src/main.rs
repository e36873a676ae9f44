//! # IgSimulator
//!
//! Entry point of the `ig-simulator` binary.

use std::process::ExitCode;

use clap::Parser;
use ig_simulator_cli::{Cli, CliError};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout, usage errors to stderr with usage
            let _ = e.print();
            return ExitCode::from(CliError::from(e).exit_code());
        }
    };

    match ig_simulator_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
