//! # Castlink Core
//!
//! Query engine over the two-file binary movie index.
//!
//! This crate provides:
//! - [`DatasetDir`] - locates the `actordata`/`moviedata` pair
//! - [`IndexStore`] - binary-searched lookups of a person's credits and a
//!   film's cast over the immutable index buffers
//! - [`find_connection`] - bounded breadth-first search for the shortest
//!   chain of co-appearances between two people
//!
//! The index is pre-built, read-only input data. An [`IndexStore`] holds
//! both buffers for its whole lifetime, performs no mutation, and is
//! `Send + Sync`: concurrent searches on separate threads may share one
//! store without locking.
//!
//! ## Example
//!
//! ```no_run
//! use castlink_core::IndexStore;
//! use std::path::Path;
//!
//! # fn main() -> castlink_core::CoreResult<()> {
//! let store = IndexStore::open_dir(Path::new("data"))?;
//! match store.find_connection("Fred Astaire", "Ginger Rogers")? {
//!     Some(path) => println!("{path}"),
//!     None => println!("No path between those two people could be found."),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod dir;
mod error;
mod path;
mod search;
mod store;

#[cfg(test)]
pub(crate) mod testdata;

pub use castlink_codec::{ActorRecord, Film, MovieRecord};
pub use dir::{DatasetDir, ACTOR_FILE, MOVIE_FILE};
pub use error::{CoreError, CoreResult};
pub use path::{ConnectionPath, Hop};
pub use search::{find_connection, find_connection_bounded, MAX_DEGREE};
pub use store::IndexStore;
