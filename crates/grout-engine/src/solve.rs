//! Solve detection.

use grout_core::Piece;
use grout_space::Grid;

/// Whether every piece sits on its home cell.
///
/// Unit membership is irrelevant: a board can be solved while its
/// pieces are still split across several units.
pub fn is_solved(grid: Grid, pieces: &[Piece]) -> bool {
    pieces.iter().all(|p| p.is_home(grid.cols()))
}
