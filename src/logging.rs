//! Log output setup for Dog Breeds CLI
//!
//! Installs a `tracing` subscriber that writes human-readable events to stderr,
//! keeping stdout free for lookup results.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default log level
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initializes the global subscriber
///
/// `RUST_LOG` takes precedence over the verbosity-derived default. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
