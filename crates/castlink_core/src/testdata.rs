//! Hand-assembled index buffers shared by the unit tests.
//!
//! The dataset is: actor `A` in film `M (2000)` with co-star `B`, and `B`
//! in film `N (2001)` with co-star `C`. Every offset below is written out
//! explicitly so the tests double as a worked example of the format.

use crate::store::IndexStore;
use castlink_storage::InMemoryBuffer;

/// Actor buffer: 3 records, table sorted A < B < C.
pub(crate) fn actor_bytes() -> Vec<u8> {
    vec![
        3, 0, 0, 0, // actor count
        16, 0, 0, 0, // table: "A"
        24, 0, 0, 0, // table: "B"
        36, 0, 0, 0, // table: "C"
        // record "A" at 16: odd-length name, aligned after the count
        b'A', 0, 1, 0, 12, 0, 0, 0, // 1 film: M
        // record "B" at 24
        b'B', 0, 2, 0, 12, 0, 0, 0, 28, 0, 0, 0, // 2 films: M, N
        // record "C" at 36
        b'C', 0, 1, 0, 28, 0, 0, 0, // 1 film: N
    ]
}

/// Movie buffer: 2 records, table sorted M < N.
pub(crate) fn movie_bytes() -> Vec<u8> {
    vec![
        2, 0, 0, 0, // movie count
        12, 0, 0, 0, // table: "M"
        28, 0, 0, 0, // table: "N"
        // record "M" (2000) at 12: odd-length title, pad byte, then
        // 2 alignment bytes after the cast count
        b'M', 0, 100, 0, 2, 0, 0, 0, 16, 0, 0, 0, 24, 0, 0, 0, // cast: A, B
        // record "N" (2001) at 28
        b'N', 0, 101, 0, 2, 0, 0, 0, 24, 0, 0, 0, 36, 0, 0, 0, // cast: B, C
    ]
}

/// Opens an [`IndexStore`] over the test dataset.
pub(crate) fn store() -> IndexStore {
    IndexStore::open(
        Box::new(InMemoryBuffer::new(actor_bytes())),
        Box::new(InMemoryBuffer::new(movie_bytes())),
    )
    .expect("test dataset must open")
}
