//! Buffer source trait definition.

use crate::error::{StorageError, StorageResult};

/// A read-only contiguous byte range backing one index file.
///
/// Buffer sources are **opaque byte ranges**. They expose the raw bytes of
/// an index file and nothing else. Castlink owns all format interpretation -
/// sources do not understand records, offset tables, or padding rules.
///
/// # Invariants
///
/// - `bytes` returns the same, unchanged slice for the source's whole
///   lifetime
/// - The backing resource is released exactly once, on drop
/// - Sources must be `Send + Sync` for concurrent readers
///
/// # Implementors
///
/// - [`super::InMemoryBuffer`] - For testing
/// - [`super::FileBuffer`] - For index files on disk
pub trait BufferSource: Send + Sync {
    /// Returns the full contents of the buffer.
    fn bytes(&self) -> &[u8];

    /// Returns the buffer size in bytes.
    fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Returns `true` if the buffer holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `len` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadPastEnd`] if the requested range extends
    /// beyond the buffer.
    fn slice_at(&self, offset: usize, len: usize) -> StorageResult<&[u8]> {
        let data = self.bytes();
        let end = offset.saturating_add(len);
        if offset > data.len() || end > data.len() {
            return Err(StorageError::ReadPastEnd {
                offset,
                len,
                size: data.len(),
            });
        }
        Ok(&data[offset..end])
    }
}
