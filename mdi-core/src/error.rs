//! Error handling for the MDI core layer.
//!
//! The main error type for this crate is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`]. All of them are defined with
//! `thiserror`.
//!
//! Window management itself never fails; these errors only surface at the
//! edges of the application (reading configuration, installing the logger,
//! touching the filesystem).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the MDI shell.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration loading, parsing, or validation failed.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// The logging system could not be installed.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// A filesystem operation failed on a specific path.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds values the shell cannot use.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The global subscriber could not be installed, or the config was unusable.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),
}
