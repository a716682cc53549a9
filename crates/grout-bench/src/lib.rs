//! Benchmark profiles and utilities for the Grout puzzle engine.
//!
//! Provides pre-built [`PuzzleConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 8x8 board (64 pieces)
//! - [`stress_profile`]: 32x32 board (1024 pieces)
//! - [`scripted_moves`]: deterministic piece/delta script via seed
//! - [`run_session`]: apply a script to a puzzle

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grout_engine::{ObstaclePlacement, Puzzle, PuzzleConfig};

/// Build a reference benchmark profile: 8x8 board.
pub fn reference_profile(seed: u64) -> PuzzleConfig {
    PuzzleConfig {
        rows: 8,
        cols: 8,
        seed,
        placement: ObstaclePlacement::Extreme,
    }
}

/// Build a stress benchmark profile: 32x32 board.
///
/// Same as [`reference_profile`] at 16x the piece count.
pub fn stress_profile(seed: u64) -> PuzzleConfig {
    PuzzleConfig {
        rows: 32,
        cols: 32,
        seed,
        placement: ObstaclePlacement::Extreme,
    }
}

/// Generate a deterministic move script.
///
/// Each entry is `(piece_index, delta)`. The piece index is resolved to
/// its current unit when the move is played, so the script stays
/// meaningful as units merge. Deltas are mostly single steps in one of
/// the four directions, with the occasional longer slide.
pub fn scripted_moves(cols: u32, n: usize, seed: u64) -> Vec<(usize, i64)> {
    let cols = i64::from(cols);
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let piece = (state >> 33) as usize;
            let delta = match (state >> 16) % 8 {
                0 | 1 => 1,
                2 | 3 => -1,
                4 => cols,
                5 => -cols,
                6 => 2,
                _ => -2 * cols,
            };
            (piece, delta)
        })
        .collect()
}

/// Play a move script on `puzzle`. Returns the number of accepted moves.
pub fn run_session(puzzle: &mut Puzzle, script: &[(usize, i64)]) -> usize {
    let n = puzzle.state().pieces().len();
    let mut accepted = 0;
    for &(piece, delta) in script {
        let unit = puzzle.state().pieces()[piece % n].unit_id;
        if puzzle.try_move(unit, delta).outcome.is_accepted() {
            accepted += 1;
        }
    }
    accepted
}
