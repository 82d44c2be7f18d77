//! Error types for the application shell.
//!
//! Shell state transitions are total and never fail. The only failures are
//! configuration errors: an unregistered route path, an unrecognised settings
//! key, or a configuration file that cannot be read or validated.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported to the surrounding application.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Path does not match any registered route
    #[error("No route registered for path '{0}'")]
    UnknownRoute(String),
    /// Settings key outside the recognised set
    #[error("Unknown settings key '{0}'")]
    UnknownSetting(String),
    /// Configuration value failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Configuration file is not valid JSON for `ShellConfig`
    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ShellError>;
