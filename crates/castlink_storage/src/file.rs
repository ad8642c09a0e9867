//! File-backed buffer source for index files on disk.

use crate::error::StorageResult;
use crate::source::BufferSource;
use std::fs;
use std::path::{Path, PathBuf};

/// A buffer source backed by a file on disk.
///
/// The file's entire contents are read into memory when the buffer is
/// opened; from then on the source never touches the file system again.
/// The bytes stay valid and unchanged until the buffer is dropped.
///
/// # Example
///
/// ```no_run
/// use castlink_storage::{BufferSource, FileBuffer};
/// use std::path::Path;
///
/// let buffer = FileBuffer::open(Path::new("actordata")).unwrap();
/// println!("{} bytes", buffer.len());
/// ```
#[derive(Debug)]
pub struct FileBuffer {
    path: PathBuf,
    data: Vec<u8>,
}

impl FileBuffer {
    /// Opens a file and loads its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let data = fs::read(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BufferSource for FileBuffer {
    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use tempfile::tempdir;

    #[test]
    fn file_open_reads_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.bin");
        fs::write(&path, b"hello world").unwrap();

        let buffer = FileBuffer::open(&path).unwrap();
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer.bytes(), b"hello world");
    }

    #[test]
    fn file_open_missing_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let result = FileBuffer::open(&path);
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn file_open_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let buffer = FileBuffer::open(&path).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn file_slice_at() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.bin");
        fs::write(&path, b"hello world").unwrap();

        let buffer = FileBuffer::open(&path).unwrap();
        assert_eq!(buffer.slice_at(0, 5).unwrap(), b"hello");
        assert_eq!(buffer.slice_at(6, 5).unwrap(), b"world");
    }

    #[test]
    fn file_slice_past_end_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.bin");
        fs::write(&path, b"hello").unwrap();

        let buffer = FileBuffer::open(&path).unwrap();
        let result = buffer.slice_at(3, 10);
        assert!(matches!(result, Err(StorageError::ReadPastEnd { .. })));
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.bin");
        fs::write(&path, b"x").unwrap();

        let buffer = FileBuffer::open(&path).unwrap();
        assert_eq!(buffer.path(), path);
    }
}
