//! Tracing subscriber setup for the command line binary

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured level;
/// `verbose` forces debug output for this crate.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if wants_json(config) {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!("logger init failed: {e}"))
}

fn default_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "tourguide=debug".to_string()
    } else {
        config.level.clone()
    }
}

fn wants_json(config: &LoggingConfig) -> bool {
    config.format == "json"
}
