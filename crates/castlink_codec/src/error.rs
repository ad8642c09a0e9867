//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding index records.
///
/// The shipped index is externally validated, so these exist purely as a
/// defensive boundary: a structural violation fails the lookup instead of
/// reading out of bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A record ran past the end of the buffer.
    #[error("unexpected end of buffer at offset {offset}")]
    UnexpectedEof {
        /// Position where the read would have left the buffer.
        offset: usize,
    },

    /// A name or title has no NUL terminator within the buffer.
    #[error("missing NUL terminator for string at offset {offset}")]
    MissingTerminator {
        /// Position where the string starts.
        offset: usize,
    },

    /// A table or record offset points outside the buffer.
    #[error("offset {offset} out of bounds for buffer of {size} bytes")]
    OffsetOutOfBounds {
        /// The offending offset.
        offset: usize,
        /// The buffer size.
        size: usize,
    },

    /// A name or title is not valid UTF-8.
    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 {
        /// Position where the string starts.
        offset: usize,
    },
}

impl CodecError {
    /// Creates an unexpected EOF error.
    pub fn unexpected_eof(offset: usize) -> Self {
        Self::UnexpectedEof { offset }
    }

    /// Creates a missing terminator error.
    pub fn missing_terminator(offset: usize) -> Self {
        Self::MissingTerminator { offset }
    }

    /// Creates an out-of-bounds offset error.
    pub fn offset_out_of_bounds(offset: usize, size: usize) -> Self {
        Self::OffsetOutOfBounds { offset, size }
    }

    /// Creates an invalid UTF-8 error.
    pub fn invalid_utf8(offset: usize) -> Self {
        Self::InvalidUtf8 { offset }
    }
}
