//! Canned datasets for common test scenarios.

use crate::builder::{Dataset, DatasetBuilder};

/// The two-film sample: `A` in `M (2000)` with `B`, and `B` in `N (2001)`
/// with `C`. Connecting `A` to `C` takes exactly two hops.
#[must_use]
pub fn sample() -> Dataset {
    DatasetBuilder::new()
        .film("M", 2000, &["A", "B"])
        .film("N", 2001, &["B", "C"])
        .build()
}

/// A linear chain requiring exactly `hops` hops: people `P00`, `P01`, ...
/// where `P(i-1)` and `P(i)` share only film `F(i)`. Connecting `P00` to
/// the last person needs every link in the chain.
///
/// # Panics
///
/// Panics if `hops` is 0 or at least 100 (two-digit names).
#[must_use]
pub fn chain(hops: usize) -> Dataset {
    assert!((1..100).contains(&hops), "chain supports 1..100 hops");
    let mut builder = DatasetBuilder::new();
    for i in 1..=hops {
        let prev = format!("P{:02}", i - 1);
        let next = format!("P{i:02}");
        let title = format!("F{i:02}");
        builder = builder.film(&title, 1900 + i as u16, &[&prev, &next]);
    }
    builder.build()
}

/// Two routes between `Src` and `Dst`: one of length 2 through `Mid`, one
/// of length 4 through `LegA`/`LegB`/`LegC`. A shortest-path search must
/// come back with the length-2 route.
#[must_use]
pub fn two_routes() -> Dataset {
    DatasetBuilder::new()
        .film("Quick One", 1990, &["Src", "Mid"])
        .film("Quick Two", 1991, &["Mid", "Dst"])
        .film("Long One", 1980, &["Src", "LegA"])
        .film("Long Two", 1981, &["LegA", "LegB"])
        .film("Long Three", 1982, &["LegB", "LegC"])
        .film("Long Four", 1983, &["LegC", "Dst"])
        .build()
}
