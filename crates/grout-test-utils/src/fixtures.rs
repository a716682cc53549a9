//! Reusable piece layouts.
//!
//! A layout is a `Vec<usize>` whose entry `i` is the cell holding piece
//! `i`, the same shape `GridState::from_layout` takes.

use grout_core::{Piece, PieceId};

/// Every piece on its home cell.
pub fn solved_layout(rows: u32, cols: u32) -> Vec<usize> {
    (0..(rows as usize) * (cols as usize)).collect()
}

/// Solved, except pieces `a` and `b` trade cells.
pub fn swapped_layout(rows: u32, cols: u32, a: usize, b: usize) -> Vec<usize> {
    let mut layout = solved_layout(rows, cols);
    layout.swap(a, b);
    layout
}

/// Piece `i` on cell `n - 1 - i`. No pair is aligned when `n > 1`.
pub fn reversed_layout(rows: u32, cols: u32) -> Vec<usize> {
    let mut layout = solved_layout(rows, cols);
    layout.reverse();
    layout
}

/// Singleton-unit pieces placed according to `layout`.
pub fn pieces_from_layout(cols: u32, layout: &[usize]) -> Vec<Piece> {
    layout
        .iter()
        .enumerate()
        .map(|(i, &pos)| Piece::new(PieceId(i as u32), cols, pos))
        .collect()
}
