//! The [`Piece`] record and its home cell.

use crate::id::{PieceId, UnitId};

/// A piece's fixed coordinate in the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HomeCell {
    /// Row in the source image.
    pub row: u32,
    /// Column in the source image.
    pub col: u32,
}

impl HomeCell {
    /// Home cell of the piece with the given row-major id on a grid
    /// with `cols` columns.
    pub fn of(id: PieceId, cols: u32) -> Self {
        Self {
            row: id.0 / cols,
            col: id.0 % cols,
        }
    }

    /// Linear (row-major) index of this cell.
    pub fn index(self, cols: u32) -> usize {
        (self.row as usize) * (cols as usize) + self.col as usize
    }
}

/// One puzzle piece.
///
/// `id` and `home` never change. `current_pos` and `unit_id` are
/// rewritten by the engine, but only inside a transaction that is
/// committed as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Immutable identity.
    pub id: PieceId,
    /// Position of the piece in the solved image.
    pub home: HomeCell,
    /// Linear index of the cell the piece currently occupies.
    pub current_pos: usize,
    /// The unit this piece belongs to.
    pub unit_id: UnitId,
}

impl Piece {
    /// Create a piece at `current_pos`, alone in its own unit.
    pub fn new(id: PieceId, cols: u32, current_pos: usize) -> Self {
        Self {
            id,
            home: HomeCell::of(id, cols),
            current_pos,
            unit_id: UnitId::from(id),
        }
    }

    /// Whether the piece sits on its home cell.
    pub fn is_home(&self, cols: u32) -> bool {
        self.current_pos == self.home.index(cols)
    }
}
