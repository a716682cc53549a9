//! Move commands issued by the input source.

use crate::id::UnitId;

/// A request to displace one unit by a whole number of cells.
///
/// `delta` is a linear cell offset: `+1`/`-1` for a horizontal step,
/// `+cols`/`-cols` for a vertical step. Other values are representable
/// and are resolved literally; use [`Direction`] for single-axis steps.
///
/// # Examples
///
/// ```
/// use grout_core::{Direction, MoveCommand, UnitId};
///
/// let cmd = MoveCommand::step(UnitId(4), Direction::Down, 3);
/// assert_eq!(cmd, MoveCommand { unit: UnitId(4), delta: 3 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    /// The unit to move.
    pub unit: UnitId,
    /// Linear cell displacement.
    pub delta: i64,
}

impl MoveCommand {
    /// A move by a raw linear delta.
    pub fn new(unit: UnitId, delta: i64) -> Self {
        Self { unit, delta }
    }

    /// A single orthogonal step on a grid with `cols` columns.
    pub fn step(unit: UnitId, dir: Direction, cols: u32) -> Self {
        Self {
            unit,
            delta: dir.delta(cols),
        }
    }
}

/// One of the four orthogonal step directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Linear delta of one step in this direction.
    pub fn delta(self, cols: u32) -> i64 {
        let cols = i64::from(cols);
        match self {
            Self::Up => -cols,
            Self::Down => cols,
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Up.delta(5), -5);
        assert_eq!(Direction::Down.delta(5), 5);
        assert_eq!(Direction::Left.delta(5), -1);
        assert_eq!(Direction::Right.delta(5), 1);
    }

    #[test]
    fn step_builds_command_for_grid_width() {
        let cmd = MoveCommand::step(UnitId(2), Direction::Up, 7);
        assert_eq!(cmd, MoveCommand::new(UnitId(2), -7));
    }
}
