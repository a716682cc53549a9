//! Error types for move resolution and puzzle layout.
//!
//! Move errors are local and non-fatal: every variant collapses into a
//! rejected move with no state change. Layout errors describe a bad
//! initial permutation and are caught when a puzzle is constructed.

use std::error::Error;
use std::fmt;

use crate::id::{PieceId, UnitId};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// No piece carries the requested unit id.
    UnknownUnit {
        /// The unit that was asked to move.
        unit: UnitId,
    },
    /// A piece would leave the grid.
    OutOfBounds {
        /// The first piece (by id) whose target is off the grid.
        piece: PieceId,
        /// The offending linear target.
        target: i64,
        /// Number of cells on the grid.
        cell_count: usize,
    },
    /// A single horizontal step would carry a piece into another row.
    RowWrapViolation {
        /// The first piece (by id) that would wrap.
        piece: PieceId,
        /// Position before the move.
        from: usize,
        /// Position the piece would land on.
        to: usize,
    },
    /// More pieces would be pushed than there are cells to push them into.
    InsufficientSpace {
        /// Number of obstacles displaced by the move.
        obstacles: usize,
        /// Number of cells the moving unit leaves behind.
        vacated: usize,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnit { unit } => write!(f, "unit {unit} has no pieces"),
            Self::OutOfBounds {
                piece,
                target,
                cell_count,
            } => write!(
                f,
                "piece {piece} would move to {target}, outside [0, {cell_count})"
            ),
            Self::RowWrapViolation { piece, from, to } => {
                write!(f, "piece {piece} would wrap rows moving {from} -> {to}")
            }
            Self::InsufficientSpace { obstacles, vacated } => write!(
                f,
                "{obstacles} obstacles cannot fit in {vacated} vacated cells"
            ),
        }
    }
}

impl Error for MoveError {}

/// Problems with an initial piece permutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout does not list one position per cell.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied layout.
        got: usize,
    },
    /// A position lies outside the grid.
    PositionOutOfRange {
        /// Piece the position was given for.
        piece: PieceId,
        /// The offending position.
        pos: usize,
        /// Number of cells on the grid.
        cell_count: usize,
    },
    /// Two pieces were placed on the same cell.
    DuplicatePosition {
        /// The shared position.
        pos: usize,
        /// The piece that claimed the cell first.
        first: PieceId,
        /// The piece that claimed it again.
        second: PieceId,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "layout has {got} positions, expected {expected}")
            }
            Self::PositionOutOfRange {
                piece,
                pos,
                cell_count,
            } => write!(
                f,
                "piece {piece} placed at {pos}, outside [0, {cell_count})"
            ),
            Self::DuplicatePosition { pos, first, second } => {
                write!(f, "pieces {first} and {second} both placed at {pos}")
            }
        }
    }
}

impl Error for LayoutError {}
