//! In-memory buffer source for testing.

use crate::source::BufferSource;

/// An in-memory buffer source.
///
/// This source holds its bytes in a plain `Vec` and is suitable for:
/// - Unit tests
/// - Integration tests over synthetic datasets
/// - Ephemeral indexes that never touch disk
///
/// # Example
///
/// ```rust
/// use castlink_storage::{BufferSource, InMemoryBuffer};
///
/// let buffer = InMemoryBuffer::new(vec![1, 2, 3]);
/// assert_eq!(buffer.len(), 3);
/// assert_eq!(buffer.bytes(), &[1, 2, 3]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryBuffer {
    data: Vec<u8>,
}

impl InMemoryBuffer {
    /// Creates a buffer holding the given bytes.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Creates an empty buffer.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl BufferSource for InMemoryBuffer {
    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[test]
    fn memory_empty() {
        let buffer = InMemoryBuffer::empty();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn memory_holds_data() {
        let buffer = InMemoryBuffer::new(b"hello world".to_vec());
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer.bytes(), b"hello world");
    }

    #[test]
    fn memory_slice_at() {
        let buffer = InMemoryBuffer::new(b"hello world".to_vec());
        assert_eq!(buffer.slice_at(0, 5).unwrap(), b"hello");
        assert_eq!(buffer.slice_at(6, 5).unwrap(), b"world");
    }

    #[test]
    fn memory_empty_slice() {
        let buffer = InMemoryBuffer::new(b"hello".to_vec());
        assert!(buffer.slice_at(2, 0).unwrap().is_empty());
    }

    #[test]
    fn memory_slice_past_end_fails() {
        let buffer = InMemoryBuffer::new(b"hello".to_vec());
        let result = buffer.slice_at(10, 5);
        assert!(matches!(result, Err(StorageError::ReadPastEnd { .. })));
    }

    #[test]
    fn memory_slice_extending_past_end_fails() {
        let buffer = InMemoryBuffer::new(b"hello".to_vec());
        let result = buffer.slice_at(3, 10);
        assert!(matches!(result, Err(StorageError::ReadPastEnd { .. })));
    }
}
