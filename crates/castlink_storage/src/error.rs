//! Error types for buffer acquisition and access.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while acquiring or reading a buffer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Attempted to read beyond the end of the buffer.
    #[error("read beyond end of buffer: offset {offset}, len {len}, size {size}")]
    ReadPastEnd {
        /// The requested read offset.
        offset: usize,
        /// The requested read length.
        len: usize,
        /// The buffer size.
        size: usize,
    },
}
