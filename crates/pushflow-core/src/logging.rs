/*!
 * Logging functionality for pushflow.
 *
 * This module provides tracing setup and utilities for consistent logging
 * across the pushflow ecosystem.
 */
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize the logging system with default configuration
pub fn init() -> Result<()> {
    init_with_filter("info")
}

/// Initialize the logging system with a specific filter
///
/// # Arguments
///
/// * `filter` - The log filter string (e.g., "info", "debug", "pushflow=trace")
pub fn init_with_filter(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .map_err(|e| Error::runtime(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Initialize the logging system from a logging configuration section
pub fn init_with_config(config: &LoggingConfig) -> Result<()> {
    init_with_filter(&config.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        // This will fail if called multiple times in the same process
        // but it's fine for a single test
        let _ = init();
    }

    #[test]
    fn test_init_with_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };
        // Only the first initialization in the process can succeed; the
        // second registration attempt must surface as a runtime error,
        // not a panic.
        let _ = init_with_config(&config);
    }
}
