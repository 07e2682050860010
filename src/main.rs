//! Dog Breeds CLI - Look up dog sub-breeds
//!
//! Queries the dog.ceo API for the sub-breeds of each breed given on the command
//! line, caching successful answers for the rest of the run.

use std::process::ExitCode;

use clap::Parser;

use dogbreeds::app;
use dogbreeds::cli::{Cli, OutputFormat, RunConfig};
use dogbreeds::logging;

/// Exit status for invalid arguments or an unusable client configuration
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let summary = match app::run(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match config.output {
        OutputFormat::Text => println!("{}", summary.render_text()),
        OutputFormat::Json => match summary.render_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
