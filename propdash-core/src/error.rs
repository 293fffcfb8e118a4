//! Structured error types for propdash-core.
//!
//! Uses `thiserror` so library consumers get composable errors.
//! The `propdash` binary wraps these in `anyhow` for reporting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML for [`crate::PropdashConfig`]
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Environment override holds a value of the wrong shape
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidOverride {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// A file value that parses but cannot be used
    #[error("invalid config value {key} = {value} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Config could not be rendered back to TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
