//! Grout quickstart: build a puzzle, move units, watch them fuse.
//!
//! Demonstrates:
//!   1. Building a puzzle from an explicit layout and from a seed
//!   2. Raw moves, single steps, and decomposed drags
//!   3. Reading events, metrics, and session counters
//!
//! Run with:
//!   cargo run --example quickstart

use grout_core::{Direction, UnitId};
use grout_engine::{GridState, Puzzle, PuzzleConfig};

// ─── Rendering ──────────────────────────────────────────────────

fn render(state: &GridState) -> String {
    let cols = state.grid().cols() as usize;
    let occupant = state.occupancy();
    let mut out = String::new();
    for row in occupant.chunks(cols) {
        for id in row {
            let unit = state.unit_of(*id).map(|u| u.0).unwrap_or_default();
            out.push_str(&format!("{:>3}/{:<3}", id.0, unit));
        }
        out.push('\n');
    }
    out
}

fn main() {
    // ─── 1. Two pieces swapped ──────────────────────────────────
    let layout = [1, 0, 2, 3, 4, 5, 6, 7, 8];
    let mut puzzle = Puzzle::with_layout(PuzzleConfig::default(), &layout)
        .expect("layout is a permutation");
    println!("start (piece/unit):\n{}", render(puzzle.state()));

    let report = puzzle.try_move(UnitId(1), -1);
    println!("move unit 1 by -1: {:?} -> {:?}", report.outcome, report.event);

    let report = puzzle.try_step(UnitId(1), Direction::Right);
    println!(
        "step unit 1 right: {:?}, {} unions in {} us",
        report.event, report.metrics.unions, report.metrics.total_us
    );
    println!("{}", render(report.state));

    // ─── 2. A seeded scramble driven by drags ───────────────────
    let config = PuzzleConfig {
        seed: 7,
        ..PuzzleConfig::with_dims(4, 4)
    };
    let mut puzzle = Puzzle::new(config).expect("4x4 is a valid grid");
    println!("scrambled 4x4:\n{}", render(puzzle.state()));

    for (piece, d_rows, d_cols) in [(0u32, 1, 1), (5, -1, 2), (10, 2, -2), (15, -3, 0)] {
        let unit = puzzle
            .unit_of(grout_core::PieceId(piece))
            .unwrap_or(UnitId(0));
        let report = puzzle.try_drag(unit, d_rows, d_cols);
        let events: Vec<String> = report.events().map(|e| e.to_string()).collect();
        println!(
            "drag piece {piece} by ({d_rows}, {d_cols}): {}/{} steps, events {:?}",
            report.accepted_steps(),
            report.steps.len(),
            events
        );
    }
    println!("{}", render(puzzle.state()));

    // ─── 3. Session counters ────────────────────────────────────
    let stats = puzzle.stats();
    println!(
        "accepted {}, rejected {} (bounds {}, wrap {}), merges {}",
        stats.accepted, stats.rejected, stats.out_of_bounds, stats.row_wrap, stats.merges
    );
    println!("{puzzle:?}");
}
