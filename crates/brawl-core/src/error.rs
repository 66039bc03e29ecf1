//! Error types for match construction and configuration loading.
//!
//! The tick path itself is infallible: degenerate numeric state is clamped and
//! late deferred events are dropped. Only loading and validating a
//! [`MatchConfig`](crate::config::MatchConfig) can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results carrying a [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures raised while loading or validating match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read match config from {path}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`MatchConfig`](crate::config::MatchConfig).
    #[error("failed to parse match config")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with.
    #[error("invalid match config: `{field}` {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) const fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_message_names_field() {
        let err = ConfigError::invalid("physics.friction", "must be in [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid match config: `physics.friction` must be in [0, 1]"
        );
    }

    #[test]
    fn parse_error_converts() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
