//! Error types for the token-sieve library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SieveError`] enum.
//!
//! # Examples
//!
//! ```
//! use token_sieve::error::{Result, SieveError};
//!
//! fn load() -> Result<()> {
//!     Err(SieveError::invalid_config("empty pattern"))
//! }
//!
//! assert!(matches!(load(), Err(SieveError::InvalidConfiguration(_))));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for token-sieve operations.
#[derive(Error, Debug)]
pub enum SieveError {
    /// The instance payload is not of the kind a pipe can process.
    #[error("Type mismatch: expected {expected} payload, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A persisted state record carries an unknown version tag.
    #[error("Version mismatch: found state version {found}, expected {expected}")]
    VersionMismatch { found: i32, expected: i32 },

    /// A filter could not be built from the supplied configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O errors (truncated records, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SieveError.
pub type Result<T> = std::result::Result<T, SieveError>;

impl SieveError {
    /// Create a new type mismatch error.
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        SieveError::TypeMismatch { expected, found }
    }

    /// Create a new version mismatch error.
    pub fn version_mismatch(found: i32, expected: i32) -> Self {
        SieveError::VersionMismatch { found, expected }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SieveError::InvalidConfiguration(msg.into())
    }
}
