//! The puzzle state snapshot.
//!
//! [`GridState`] is an immutable value from the outside: it exposes
//! pieces by shared reference only, and the engine replaces it wholesale
//! at the end of every accepted move.

use grout_core::{LayoutError, Piece, PieceId, UnitId};
use grout_space::Grid;
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::solve;

/// Members of one unit, in piece-id order.
pub type UnitMembers = SmallVec<[PieceId; 8]>;

/// Grid dimensions, pieces ordered by id, and the solved flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    grid: Grid,
    pieces: Vec<Piece>,
    solved: bool,
}

impl GridState {
    /// Every piece on its home cell, each in its own unit.
    pub fn solved(grid: Grid) -> Self {
        let layout: Vec<usize> = (0..grid.cell_count()).collect();
        let pieces = build_pieces(grid, &layout);
        Self {
            grid,
            pieces,
            solved: true,
        }
    }

    /// Place piece `i` on cell `layout[i]`, each piece in its own unit.
    ///
    /// The layout must be a permutation of `0..rows*cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grout_engine::GridState;
    /// use grout_space::Grid;
    ///
    /// let grid = Grid::new(2, 2).unwrap();
    /// let state = GridState::from_layout(grid, &[1, 0, 2, 3]).unwrap();
    /// assert!(!state.is_solved());
    /// assert!(GridState::from_layout(grid, &[0, 0, 2, 3]).is_err());
    /// ```
    pub fn from_layout(grid: Grid, layout: &[usize]) -> Result<Self, LayoutError> {
        validate_layout(grid, layout)?;
        let pieces = build_pieces(grid, layout);
        let solved = solve::is_solved(grid, &pieces);
        Ok(Self {
            grid,
            pieces,
            solved,
        })
    }

    /// Assemble a state from already-validated parts.
    pub(crate) fn from_parts(grid: Grid, pieces: Vec<Piece>, solved: bool) -> Self {
        Self {
            grid,
            pieces,
            solved,
        }
    }

    /// Grid dimensions.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// All pieces, ordered by id.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up a piece by id.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Whether every piece is on its home cell.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Current position of every piece, indexed by piece id.
    pub fn positions(&self) -> Vec<usize> {
        self.pieces.iter().map(|p| p.current_pos).collect()
    }

    /// The piece occupying each cell, indexed by cell.
    pub fn occupancy(&self) -> Vec<PieceId> {
        occupancy(self.grid, &self.pieces)
    }

    /// The unit the given piece belongs to.
    pub fn unit_of(&self, id: PieceId) -> Option<UnitId> {
        self.piece(id).map(|p| p.unit_id)
    }

    /// Members of `unit`, empty if no piece carries that id.
    pub fn unit_members(&self, unit: UnitId) -> UnitMembers {
        self.pieces
            .iter()
            .filter(|p| p.unit_id == unit)
            .map(|p| p.id)
            .collect()
    }

    /// The unit partition, keyed in order of each unit's lowest piece id.
    pub fn units(&self) -> IndexMap<UnitId, UnitMembers> {
        let mut units: IndexMap<UnitId, UnitMembers> = IndexMap::new();
        for p in &self.pieces {
            units.entry(p.unit_id).or_default().push(p.id);
        }
        units
    }

    /// Number of distinct units.
    pub fn unit_count(&self) -> usize {
        self.units().len()
    }

    /// Whether the piece positions form a permutation of the grid cells.
    pub fn is_permutation(&self) -> bool {
        validate_layout(self.grid, &self.positions()).is_ok()
    }
}

/// Cell → occupying piece, for a complete arrangement.
pub(crate) fn occupancy(grid: Grid, pieces: &[Piece]) -> Vec<PieceId> {
    let mut cells = vec![PieceId(0); grid.cell_count()];
    for p in pieces {
        cells[p.current_pos] = p.id;
    }
    cells
}

fn build_pieces(grid: Grid, layout: &[usize]) -> Vec<Piece> {
    layout
        .iter()
        .enumerate()
        .map(|(i, &pos)| Piece::new(PieceId(i as u32), grid.cols(), pos))
        .collect()
}

fn validate_layout(grid: Grid, layout: &[usize]) -> Result<(), LayoutError> {
    let cell_count = grid.cell_count();
    if layout.len() != cell_count {
        return Err(LayoutError::LengthMismatch {
            expected: cell_count,
            got: layout.len(),
        });
    }
    let mut owner: Vec<Option<PieceId>> = vec![None; cell_count];
    for (i, &pos) in layout.iter().enumerate() {
        let piece = PieceId(i as u32);
        if pos >= cell_count {
            return Err(LayoutError::PositionOutOfRange {
                piece,
                pos,
                cell_count,
            });
        }
        if let Some(first) = owner[pos] {
            return Err(LayoutError::DuplicatePosition {
                pos,
                first,
                second: piece,
            });
        }
        owner[pos] = Some(piece);
    }
    Ok(())
}
