//! Structured error types for lightbnb-core.
//!
//! Uses `thiserror` so library consumers can match on the failure.
//! The `lightbnb` binary wraps these in `anyhow` with context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lightbnb-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for [`crate::LightbnbConfig`]
    #[error("Failed to parse config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be serialized back to TOML
    #[error("Failed to serialize config: {source}")]
    TomlSer {
        #[from]
        source: toml::ser::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for lightbnb-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a TOML parse error for the given file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
