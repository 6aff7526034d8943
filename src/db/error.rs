//! Storage error types
//!
//! Every failure while saving or loading a library snapshot ends up here,
//! whichever backend produced it.

use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding library: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding library: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// JSON snapshot could not be read or written
    #[error("Error in JSON snapshot: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Snapshot file could not be read, written or renamed
    #[error("I/O error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DbError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
