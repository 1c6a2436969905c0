//! Unified error types for the ECM crates.
//!
//! [`EcmError`] is the common error currency at API boundaries. Domain code
//! mostly produces `Validation` errors; file-facing code wraps `Io` and
//! `Parse` failures.

use thiserror::Error;

/// Unified error type for all ECM operations.
#[derive(Error, Debug)]
pub enum EcmError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input or record validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using EcmError.
pub type EcmResult<T> = Result<T, EcmError>;

impl From<anyhow::Error> for EcmError {
    fn from(err: anyhow::Error) -> Self {
        EcmError::Other(err.to_string())
    }
}

impl From<String> for EcmError {
    fn from(s: String) -> Self {
        EcmError::Other(s)
    }
}

impl From<&str> for EcmError {
    fn from(s: &str) -> Self {
        EcmError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for EcmError {
    fn from(err: serde_json::Error) -> Self {
        EcmError::Parse(err.to_string())
    }
}
