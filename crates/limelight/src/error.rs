//! Error types.
//!
//! Table accessors never fail: a missing or mistyped entry reads as its
//! default. Errors only come from explicit mode decoding and from loading
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

/// A table number that does not encode a valid mode.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ModeDecodeError {
    /// NaN, infinite, or has a fractional part.
    #[error("{kind} value {value} is not an integral number")]
    NotIntegral {
        /// Mode being decoded.
        kind: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Integral, but no variant has this code.
    #[error("{kind} code {code} is outside 0..={max}")]
    OutOfDomain {
        /// Mode being decoded.
        kind: &'static str,
        /// The offending code.
        code: i32,
        /// Highest valid code.
        max: u8,
    },
}

/// Errors raised while loading or validating [`crate::LimelightConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid YAML for the expected shape.
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Table name is empty or whitespace.
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
}

impl ConfigError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid table name error.
    #[must_use]
    pub fn invalid_table_name(name: impl Into<String>) -> Self {
        Self::InvalidTableName(name.into())
    }
}

/// A specialized `Result` type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
