//! Error taxonomy.
//!
//! There is no fatal error path inside the widget core: malformed markup
//! degrades to an empty table, malformed structured values are treated as
//! plain text, and per-cell post-processing failures are logged and skipped.
//! The error types here cover the surrounding concerns a host wires up:
//! configuration loading and log-subscriber initialization.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for host-facing setup operations.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of its accepted range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}
