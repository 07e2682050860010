//! Command-line interface parsing for Dog Breeds CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `RunConfig` for the lookup run.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::dog_api::{ClientConfig, DEFAULT_TIMEOUT_SECS, DOG_API_BASE_URL};

/// Upper bound for `--rounds`
pub const MAX_ROUNDS: u32 = 1000;

/// Error types for CLI argument validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The request timeout must be positive
    #[error("Invalid timeout: {0} seconds. The timeout must be at least 1 second")]
    InvalidTimeout(u64),

    /// At least one lookup round is required
    #[error("Invalid rounds: {0}. At least 1 round is required")]
    InvalidRounds(u32),

    /// More rounds than a single run allows
    #[error("Too many rounds: {0}. At most {max} rounds are allowed", max = MAX_ROUNDS)]
    TooManyRounds(u32),
}

/// Dog Breeds CLI - Look up the sub-breeds of dog breeds
#[derive(Parser, Debug)]
#[command(name = "dogbreeds")]
#[command(about = "Look up dog sub-breeds from the dog.ceo API")]
#[command(version)]
pub struct Cli {
    /// Breeds to look up, e.g. hound or bulldog (case-sensitive)
    #[arg(value_name = "BREED", required = true)]
    pub breeds: Vec<String>,

    /// Base URL of the dog.ceo API
    #[arg(long, value_name = "URL", env = "DOG_API_BASE_URL", default_value = DOG_API_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Look every breed up this many times (at most 1000)
    ///
    /// With the cache enabled, rounds after the first are answered from memory
    /// for every breed that was found.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub rounds: u32,

    /// Query the API for every lookup instead of caching results
    #[arg(long)]
    pub no_cache: bool,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How lookup results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per lookup
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Configuration derived from CLI arguments for a lookup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Breeds to look up, in order
    pub breeds: Vec<String>,
    /// Settings for the API client
    pub client: ClientConfig,
    /// How many times each breed is looked up
    pub rounds: u32,
    /// Whether lookups go through the in-memory cache
    pub use_cache: bool,
    /// Output format for the results
    pub output: OutputFormat,
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with validated settings
    /// * `Err(CliError)` if the timeout or round count is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout == 0 {
            return Err(CliError::InvalidTimeout(cli.timeout));
        }
        if cli.rounds == 0 {
            return Err(CliError::InvalidRounds(cli.rounds));
        }
        if cli.rounds > MAX_ROUNDS {
            return Err(CliError::TooManyRounds(cli.rounds));
        }

        Ok(RunConfig {
            breeds: cli.breeds.clone(),
            client: ClientConfig {
                base_url: cli.base_url.clone(),
                timeout: Duration::from_secs(cli.timeout),
            },
            rounds: cli.rounds,
            use_cache: !cli.no_cache,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        })
    }
}
