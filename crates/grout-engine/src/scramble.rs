//! Seeded initial scrambles.
//!
//! Uses a ChaCha8 RNG seeded from the configured `u64`, so the same seed
//! produces the same starting layout on every platform.

use grout_space::Grid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A uniformly random layout for `grid`, never the solved one when the
/// grid has more than one cell.
///
/// Entry `i` is the cell holding piece `i`.
pub fn scrambled_layout(grid: Grid, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut layout: Vec<usize> = (0..grid.cell_count()).collect();
    if layout.len() < 2 {
        return layout;
    }
    loop {
        layout.shuffle(&mut rng);
        if layout.iter().enumerate().any(|(i, &pos)| i != pos) {
            return layout;
        }
    }
}
