//! Logging setup for SymptomBuddy
//!
//! Installs a `tracing-subscriber` fmt layer. `RUST_LOG` takes precedence
//! over the CLI verbosity flags.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Build the filter used by the subscriber
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .try_init();
    debug!(verbosity = verbosity.as_str(), "Logging initialized");
}
