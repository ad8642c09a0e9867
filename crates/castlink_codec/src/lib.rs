//! # Castlink Codec
//!
//! Record decoding for the castlink binary index format.
//!
//! The index consists of two flat buffers, `actordata` and `moviedata`.
//! Each starts with a record count, followed by a sorted table of 4-byte
//! offsets, followed by a record area of variable-length records. All
//! integers are little-endian.
//!
//! ## Record Layout
//!
//! An actor record is:
//!
//! ```text
//! name bytes, NUL
//! 1 pad byte        iff the name length is even
//! film count (u16)
//! 2 pad bytes       iff the position after the count is not 4-byte
//!                   aligned relative to the record start
//! film count x u32  offsets into the movie buffer
//! ```
//!
//! A movie record mirrors it, with a year byte (year - 1900) after the
//! title's NUL and the *opposite* pad parity (pad iff the title length is
//! odd - the extra year byte flips it). The two parity rules are kept as
//! separate code paths; unifying them would break compatibility with
//! externally produced index files.
//!
//! ## Usage
//!
//! ```
//! use castlink_codec::decode_actor_record;
//!
//! // name "ABC" (odd length, no pad), one film at offset 0x2a
//! let bytes = [b'A', b'B', b'C', 0, 1, 0, 0, 0, 0x2a, 0, 0, 0];
//! let record = decode_actor_record(&bytes, 0).unwrap();
//! assert_eq!(record.name, "ABC");
//! assert_eq!(record.film_offsets, vec![0x2a]);
//! ```
//!
//! All reads are bounds-checked: a malformed record surfaces as a
//! [`CodecError`] rather than a read past the buffer end.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod error;
mod film;

pub use decoder::{
    compare_film_at, compare_name_at, decode_actor_record, decode_movie_record, read_film_at,
    read_name_at, ActorRecord, MovieRecord,
};
pub use error::{CodecError, CodecResult};
pub use film::Film;
