//! Strongly-typed identifiers for pieces and units.

use std::fmt;

/// Identifies a puzzle piece.
///
/// Pieces are numbered in row-major order of the source image, so
/// `PieceId(n)` is also the linear index of the piece's home cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl PieceId {
    /// The id as a `usize` index into a piece table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PieceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a unit: the group of pieces that move together.
///
/// Every piece starts in its own unit with `UnitId` equal to its
/// [`PieceId`]. Fresh ids minted by a split are always greater than
/// any id previously in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UnitId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<PieceId> for UnitId {
    fn from(id: PieceId) -> Self {
        Self(u64::from(id.0))
    }
}
