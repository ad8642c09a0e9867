//! # Castlink Testkit
//!
//! Test utilities for castlink.
//!
//! This crate provides:
//! - A dataset builder that encodes the binary index format, so tests can
//!   construct synthetic `actordata`/`moviedata` buffers
//! - Canned fixtures for common test scenarios
//! - Property-based test generators using proptest
//!
//! The builder is the only encoder of the format in the workspace: the
//! production crates never write index files, they only read them.
//!
//! ## Usage
//!
//! ```rust
//! use castlink_testkit::DatasetBuilder;
//!
//! let store = DatasetBuilder::new()
//!     .film("M", 2000, &["A", "B"])
//!     .film("N", 2001, &["B", "C"])
//!     .build()
//!     .store();
//! assert!(store.has_credits("B").unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use builder::{Dataset, DatasetBuilder};
pub use fixtures::{chain, sample, two_routes};
