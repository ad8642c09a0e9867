//! # Castlink Storage
//!
//! Byte buffer sources for the castlink index.
//!
//! This crate provides the lowest-level abstraction in castlink: a way to
//! expose a file's bytes as an addressable, read-only, contiguous buffer.
//! Buffer sources are **opaque byte ranges** - they do not interpret the
//! data they hold. All index format interpretation lives in the codec and
//! core crates.
//!
//! ## Design Principles
//!
//! - A source is acquired once and its bytes stay valid and unchanged
//!   until it is dropped
//! - Sources never expose mutation; the index is read-only input data
//! - Must be `Send + Sync` so one source can back concurrent readers
//!
//! ## Available Sources
//!
//! - [`InMemoryBuffer`] - For testing and ephemeral data
//! - [`FileBuffer`] - For index files on disk
//!
//! ## Example
//!
//! ```rust
//! use castlink_storage::{BufferSource, InMemoryBuffer};
//!
//! let buffer = InMemoryBuffer::new(b"hello world".to_vec());
//! assert_eq!(buffer.len(), 11);
//! assert_eq!(buffer.slice_at(6, 5).unwrap(), b"world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod source;

pub use error::{StorageError, StorageResult};
pub use file::FileBuffer;
pub use memory::InMemoryBuffer;
pub use source::BufferSource;
