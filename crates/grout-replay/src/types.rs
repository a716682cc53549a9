//! Data types for replay recording and playback.

use grout_core::{MoveEvent, UnitId};
use grout_engine::{ConfigError, ObstaclePlacement, Puzzle, PuzzleConfig};

/// Puzzle initialization parameters stored in the replay header.
///
/// Captures everything needed to rebuild the recorded puzzle: the grid,
/// the obstacle placement policy, and the starting layout. The seed is
/// not needed since the layout is stored verbatim.
///
/// # Examples
///
/// ```
/// use grout_engine::ObstaclePlacement;
/// use grout_replay::InitDescriptor;
///
/// let init = InitDescriptor {
///     rows: 2,
///     cols: 2,
///     placement: ObstaclePlacement::Extreme,
///     positions: vec![1, 0, 2, 3],
/// };
///
/// let puzzle = init.to_puzzle().unwrap();
/// assert_eq!(puzzle.state().positions(), vec![1, 0, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitDescriptor {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub cols: u32,
    /// Obstacle placement policy.
    pub placement: ObstaclePlacement,
    /// Starting cell of every piece, indexed by piece id.
    pub positions: Vec<usize>,
}

impl InitDescriptor {
    /// Describe the starting point of `puzzle`.
    pub fn of(puzzle: &Puzzle) -> Self {
        let grid = puzzle.grid();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            placement: puzzle.placement(),
            positions: puzzle.initial().positions(),
        }
    }

    /// Rebuild the puzzle this descriptor was taken from.
    pub fn to_puzzle(&self) -> Result<Puzzle, ConfigError> {
        let config = PuzzleConfig {
            placement: self.placement,
            ..PuzzleConfig::with_dims(self.rows, self.cols)
        };
        Puzzle::with_layout(config, &self.positions)
    }
}

/// A single recorded move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Zero-based index of the move within the session.
    pub move_index: u64,
    /// The unit that was asked to move.
    pub unit: UnitId,
    /// The requested linear displacement.
    pub delta: i64,
    /// Whether the move was committed.
    pub accepted: bool,
    /// The event the move emitted.
    pub event: Option<MoveEvent>,
    /// FNV-1a hash of the state after the move.
    pub state_hash: u64,
}
