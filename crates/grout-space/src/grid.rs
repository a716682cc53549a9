//! The rectangular puzzle grid.

use crate::cell::{Cell, Offset};
use crate::error::SpaceError;
use smallvec::SmallVec;

/// A `rows × cols` grid with 4-connected, absorbing-edge topology.
///
/// Cells are addressed by row-major linear index. The grid itself
/// holds no pieces; it only answers geometric questions about indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Maximum dimension size: offsets use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// and `Err(SpaceError::CellCountOverflow)` if the cell count does
    /// not fit a `u32` piece id.
    ///
    /// # Examples
    ///
    /// ```
    /// use grout_space::{Cell, Grid};
    ///
    /// let grid = Grid::new(3, 4).unwrap();
    /// assert_eq!(grid.cell_count(), 12);
    /// assert_eq!(grid.cell(7), Cell::new(1, 3));
    /// assert!(grid.adjacent(6, 7));
    /// assert!(!grid.adjacent(7, 8)); // 7 ends row 1, 8 starts row 2
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let cells = u64::from(rows) * u64::from(cols);
        if cells > u64::from(u32::MAX) {
            return Err(SpaceError::CellCountOverflow { value: cells });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Decode a linear index into a coordinate.
    pub fn cell(&self, index: usize) -> Cell {
        debug_assert!(index < self.cell_count(), "cell index {index} out of range");
        let cols = self.cols as usize;
        Cell {
            row: (index / cols) as u32,
            col: (index % cols) as u32,
        }
    }

    /// Encode a coordinate as a linear index.
    pub fn index(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.cols as usize) + cell.col as usize
    }

    /// Whether a (possibly negative) linear position lies on the grid.
    pub fn contains(&self, pos: i64) -> bool {
        pos >= 0 && (pos as u64) < self.cell_count() as u64
    }

    /// Displace `pos` by a linear `delta`, or `None` if it leaves the grid.
    pub fn translate(&self, pos: usize, delta: i64) -> Option<usize> {
        let target = (pos as i64).checked_add(delta)?;
        self.contains(target).then_some(target as usize)
    }

    /// Whether two cells share a row.
    pub fn same_row(&self, a: usize, b: usize) -> bool {
        self.cell(a).row == self.cell(b).row
    }

    /// Signed offset from cell `a` to cell `b`.
    pub fn offset(&self, a: usize, b: usize) -> Offset {
        self.cell(a).offset_to(self.cell(b))
    }

    /// Whether `a` and `b` are orthogonal neighbours (distance 1).
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.offset(a, b).is_orthogonal_unit()
    }

    /// The 4-connected neighbours of `index` (fewer on the border).
    pub fn neighbours(&self, index: usize) -> SmallVec<[usize; 4]> {
        let Cell { row, col } = self.cell(index);
        let cols = self.cols as usize;
        let mut out = SmallVec::new();
        if row > 0 {
            out.push(index - cols);
        }
        if row + 1 < self.rows {
            out.push(index + cols);
        }
        if col > 0 {
            out.push(index - 1);
        }
        if col + 1 < self.cols {
            out.push(index + 1);
        }
        out
    }

    /// East and south neighbours of `index`.
    ///
    /// Visiting these for every cell enumerates each adjacent pair
    /// exactly once.
    pub fn forward_neighbours(&self, index: usize) -> SmallVec<[usize; 2]> {
        let Cell { row, col } = self.cell(index);
        let mut out = SmallVec::new();
        if col + 1 < self.cols {
            out.push(index + 1);
        }
        if row + 1 < self.rows {
            out.push(index + self.cols as usize);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(SpaceError::EmptyGrid));
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert_eq!(Grid::new(5, 0), Err(SpaceError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 1),
            Err(SpaceError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Grid::new(1, big),
            Err(SpaceError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn new_rejects_cell_count_overflow() {
        assert!(matches!(
            Grid::new(1 << 16, 1 << 16),
            Err(SpaceError::CellCountOverflow { .. })
        ));
        assert!(Grid::new(1 << 16, (1 << 16) - 1).is_ok());
    }

    // ── Indexing ────────────────────────────────────────────────

    #[test]
    fn cell_and_index_are_inverse() {
        let g = Grid::new(4, 5).unwrap();
        for i in 0..g.cell_count() {
            assert_eq!(g.index(g.cell(i)), i);
        }
    }

    #[test]
    fn translate_respects_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.translate(0, -1), None);
        assert_eq!(g.translate(8, 1), None);
        assert_eq!(g.translate(0, 2), Some(2));
        assert_eq!(g.translate(2, 1), Some(3)); // crosses rows, still on grid
        assert_eq!(g.translate(4, i64::MAX), None);
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbours(12);
        assert_eq!(n.len(), 4);
        for nb in [7, 17, 11, 13] {
            assert!(n.contains(&nb));
        }
    }

    #[test]
    fn neighbours_corner_and_edge() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbours(0).len(), 2);
        assert_eq!(g.neighbours(2).len(), 3);
        assert_eq!(g.neighbours(24).len(), 2);
    }

    #[test]
    fn row_end_is_not_adjacent_to_next_row_start() {
        let g = Grid::new(3, 3).unwrap();
        assert!(!g.adjacent(2, 3));
        assert!(!g.neighbours(2).contains(&3));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.neighbours(0).is_empty());
        assert!(g.forward_neighbours(0).is_empty());
    }

    #[test]
    fn forward_neighbours_cover_every_pair_once() {
        let g = Grid::new(3, 4).unwrap();
        let mut pairs = 0;
        for i in 0..g.cell_count() {
            for j in g.forward_neighbours(i) {
                assert!(g.adjacent(i, j));
                assert!(i < j);
                pairs += 1;
            }
        }
        // horizontal: rows * (cols - 1), vertical: (rows - 1) * cols
        assert_eq!(pairs, 3 * 3 + 2 * 4);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(rows in 1u32..10, cols in 1u32..10, seed in 0usize..100) {
            let g = Grid::new(rows, cols).unwrap();
            let i = seed % g.cell_count();
            for nb in g.neighbours(i) {
                prop_assert!(
                    g.neighbours(nb).contains(&i),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, i,
                );
            }
        }

        #[test]
        fn adjacency_matches_neighbours(rows in 1u32..8, cols in 1u32..8, a in 0usize..64, b in 0usize..64) {
            let g = Grid::new(rows, cols).unwrap();
            let a = a % g.cell_count();
            let b = b % g.cell_count();
            prop_assert_eq!(g.adjacent(a, b), g.neighbours(a).contains(&b));
        }

        #[test]
        fn offset_antisymmetric(rows in 1u32..8, cols in 1u32..8, a in 0usize..64, b in 0usize..64) {
            let g = Grid::new(rows, cols).unwrap();
            let a = a % g.cell_count();
            let b = b % g.cell_count();
            let ab = g.offset(a, b);
            let ba = g.offset(b, a);
            prop_assert_eq!(ab.dr, -ba.dr);
            prop_assert_eq!(ab.dc, -ba.dc);
        }
    }
}
