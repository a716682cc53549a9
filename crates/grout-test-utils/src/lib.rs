//! Test utilities for Grout development.
//!
//! Layout fixtures live in [`fixtures`]; this module holds assertions
//! over piece tables that several crates' tests share. Nothing here
//! depends on the engine, so engine unit tests can use it without a
//! dependency cycle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{pieces_from_layout, reversed_layout, solved_layout, swapped_layout};

use std::collections::BTreeMap;

use grout_core::{Piece, PieceId, UnitId};
use grout_space::Grid;

/// The unit partition as sorted member lists, ordered by lowest member.
///
/// Unit id values are dropped, so two tables compare equal when they
/// group the same pieces together under different ids.
pub fn partition(pieces: &[Piece]) -> Vec<Vec<PieceId>> {
    let mut groups: BTreeMap<UnitId, Vec<PieceId>> = BTreeMap::new();
    for p in pieces {
        groups.entry(p.unit_id).or_default().push(p.id);
    }
    let mut out: Vec<Vec<PieceId>> = groups
        .into_values()
        .map(|mut members| {
            members.sort();
            members
        })
        .collect();
    out.sort();
    out
}

/// Panic unless `a` and `b` group the same pieces together.
pub fn assert_same_partition(a: &[Piece], b: &[Piece]) {
    assert_eq!(
        partition(a),
        partition(b),
        "unit partitions differ:\n  left:  {a:?}\n  right: {b:?}"
    );
}

/// Panic unless the pieces occupy every cell of `grid` exactly once.
pub fn assert_permutation(grid: Grid, pieces: &[Piece]) {
    assert_eq!(pieces.len(), grid.cell_count(), "piece count != cell count");
    let mut seen = vec![false; grid.cell_count()];
    for p in pieces {
        assert!(
            p.current_pos < grid.cell_count(),
            "piece {} off the grid at {}",
            p.id,
            p.current_pos
        );
        assert!(
            !seen[p.current_pos],
            "cell {} occupied twice (second: piece {})",
            p.current_pos,
            p.id
        );
        seen[p.current_pos] = true;
    }
}

/// Panic unless pieces are ordered by id with ids `0..n`.
pub fn assert_ordered_by_id(pieces: &[Piece]) {
    for (i, p) in pieces.iter().enumerate() {
        assert_eq!(p.id.index(), i, "piece table out of id order at slot {i}");
    }
}
