//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the level passed on the command
//! line is used as the filter.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log level could not be parsed as a filter directive.
    #[error("Invalid log level/filter '{value}': {source}")]
    EnvFilter {
        /// The rejected filter text.
        value: String,
        /// The parser error.
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("Telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter from `RUST_LOG`, falling back to `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
            value: level.to_string(),
            source,
        }),
    }
}

/// Installs a compact `fmt` subscriber as the global default.
pub fn init(level: &str) -> Result<(), TelemetryError> {
    let env_filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("debug,vacation_points=trace").is_ok());
    }

    #[test]
    fn test_invalid_level_reports_value() {
        // Only meaningful when RUST_LOG is unset
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        match build_filter("vacation_points=notalevel") {
            Err(TelemetryError::EnvFilter { value, .. }) => {
                assert_eq!(value, "vacation_points=notalevel")
            }
            other => panic!("Expected EnvFilter error, got {:?}", other.map(|_| ())),
        }
    }
}
