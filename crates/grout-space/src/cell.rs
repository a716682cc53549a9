//! Grid coordinates and signed offsets between them.

/// A cell coordinate: `0 <= row < rows`, `0 <= col < cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row, counted from the top.
    pub row: u32,
    /// Column, counted from the left.
    pub col: u32,
}

impl Cell {
    /// Create a cell coordinate.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Signed offset from `self` to `other`.
    pub fn offset_to(self, other: Cell) -> Offset {
        Offset {
            dr: (i64::from(other.row) - i64::from(self.row)) as i32,
            dc: (i64::from(other.col) - i64::from(self.col)) as i32,
        }
    }
}

/// Signed `(row, col)` displacement between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Row delta.
    pub dr: i32,
    /// Column delta.
    pub dc: i32,
}

impl Offset {
    /// Manhattan (L1) length.
    pub fn manhattan(self) -> u32 {
        self.dr.unsigned_abs() + self.dc.unsigned_abs()
    }

    /// True for the four unit steps N/S/E/W.
    pub fn is_orthogonal_unit(self) -> bool {
        self.manhattan() == 1
    }
}
