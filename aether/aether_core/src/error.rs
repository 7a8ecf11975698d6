//! Error types for the AetherStream launcher.
//!
//! Errors are organized by subsystem. The root error type, `Error`, wraps
//! the subsystem-specific errors so that every lifecycle step can return
//! the same `Result` and the launcher can describe any of them uniformly.

use std::path::PathBuf;

use thiserror::Error;

/// Root error type for the launcher and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session lock errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// An operation was called in the wrong lifecycle state
    #[error("Invalid lifecycle state: {0}")]
    InvalidState(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// General runtime errors
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Errors related to loading and validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected schema
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors related to the session lock.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The lock file could not be created for a reason other than contention
    #[error("Failed to acquire session lock {}: {source}", path.display())]
    Acquire {
        /// Path of the lock file
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The lock file could not be removed
    #[error("Failed to release session lock {}: {source}", path.display())]
    Release {
        /// Path of the lock file
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The session record could not be encoded or decoded
    #[error("Invalid session record: {0}")]
    Record(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
