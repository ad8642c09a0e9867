//! Error types for castlink core.

use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in castlink core operations.
///
/// Absence is never an error: lookups return `Ok(None)` for unknown names
/// and films, and the search returns `Ok(None)` when no chain exists, so
/// callers can present "no such person", "no path", and "index broken"
/// differently.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Buffer acquisition or access error.
    #[error("storage error: {0}")]
    Storage(#[from] castlink_storage::StorageError),

    /// Structural violation found while decoding a record.
    #[error("corrupt index: {0}")]
    Codec(#[from] castlink_codec::CodecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The index header or offset table is not well-formed.
    #[error("invalid index format: {message}")]
    InvalidFormat {
        /// Description of the format issue.
        message: String,
    },

    /// A connection search was asked to connect a person to themselves.
    #[error("source and destination are the same person")]
    SamePerson,
}

impl CoreError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
