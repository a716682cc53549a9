//! Integration test: recorded sessions replay to identical states.
//!
//! Records random sessions on scrambled puzzles, replays them on a fresh
//! puzzle rebuilt from the header, and checks that every frame matches.
//! Also checks that a single flipped hash bit is reported at the right
//! move.

use grout_core::UnitId;
use grout_engine::{ObstaclePlacement, Puzzle, PuzzleConfig};
use grout_replay::{
    replay_and_compare, state_hash, InitDescriptor, ReplayError, ReplayReader, ReplayWriter,
};
use proptest::prelude::*;

/// Record `moves` (piece index, delta) on `puzzle`, addressing each
/// move through the unit that currently holds the piece.
fn record_session(mut puzzle: Puzzle, moves: &[(usize, i64)]) -> (Vec<u8>, u64) {
    let mut buf = Vec::new();
    let mut writer = ReplayWriter::new(&mut buf, &InitDescriptor::of(&puzzle)).unwrap();
    let n = puzzle.state().pieces().len();
    for &(piece, delta) in moves {
        let unit = puzzle.state().pieces()[piece % n].unit_id;
        writer.record(&puzzle.try_move(unit, delta)).unwrap();
    }
    writer.flush().unwrap();
    drop(writer);
    (buf, state_hash(puzzle.state()))
}

fn placement() -> impl Strategy<Value = ObstaclePlacement> {
    prop_oneof![
        Just(ObstaclePlacement::Extreme),
        Just(ObstaclePlacement::OrderPreserving),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn recorded_sessions_replay_identically(
        rows in 1u32..=5,
        cols in 1u32..=5,
        seed in any::<u64>(),
        placement in placement(),
        moves in prop::collection::vec((0usize..32, -8i64..=8), 0..60),
    ) {
        let puzzle = Puzzle::new(PuzzleConfig { rows, cols, seed, placement }).unwrap();
        let (buf, final_hash) = record_session(puzzle, &moves);

        let reader = ReplayReader::open(buf.as_slice()).unwrap();
        prop_assert_eq!(reader.init_descriptor().placement, placement);
        let summary = replay_and_compare(reader).unwrap();
        prop_assert_eq!(summary.moves, moves.len() as u64);
        prop_assert_eq!(summary.accepted + summary.rejected, summary.moves);
        prop_assert_eq!(summary.final_hash, final_hash);
    }
}

#[test]
fn same_seed_and_moves_give_same_bytes() {
    let config = PuzzleConfig {
        seed: 99,
        ..PuzzleConfig::with_dims(4, 4)
    };
    let moves: Vec<(usize, i64)> = (0..200).map(|i| (i * 5, (i as i64 % 9) - 4)).collect();
    let (a, _) = record_session(Puzzle::new(config.clone()).unwrap(), &moves);
    let (b, _) = record_session(Puzzle::new(config).unwrap(), &moves);
    assert_eq!(a, b);
}

#[test]
fn tampered_hash_is_reported_at_its_move() {
    let config = PuzzleConfig {
        seed: 5,
        ..PuzzleConfig::with_dims(3, 4)
    };
    let moves: Vec<(usize, i64)> = (0..10).map(|i| (i, 1)).collect();
    let (mut buf, _) = record_session(Puzzle::new(config).unwrap(), &moves);

    // Frames are fixed-size and trail the header; the hash is each frame's
    // last eight bytes. Flip a bit in the hash of move 6.
    let frame_len = 34;
    let header_len = buf.len() - moves.len() * frame_len;
    let hash_byte = header_len + 6 * frame_len + frame_len - 8;
    buf[hash_byte] ^= 0x01;

    let err = replay_and_compare(ReplayReader::open(buf.as_slice()).unwrap()).unwrap_err();
    match err {
        ReplayError::SnapshotMismatch { move_index, .. } => assert_eq!(move_index, 6),
        other => panic!("expected a snapshot mismatch, got {other}"),
    }
}

#[test]
fn drag_sessions_replay_step_by_step() {
    let mut puzzle = Puzzle::with_layout(PuzzleConfig::with_dims(1, 4), &[1, 3, 0, 2]).unwrap();
    let mut buf = Vec::new();
    let mut writer = ReplayWriter::new(&mut buf, &InitDescriptor::of(&puzzle)).unwrap();

    let drag = puzzle.try_drag(UnitId(1), 0, -2);
    assert!(drag.completed());
    writer.record_drag(&drag).unwrap();
    let final_hash = state_hash(drag.state);
    drop(writer);

    let summary = replay_and_compare(ReplayReader::open(buf.as_slice()).unwrap()).unwrap();
    assert_eq!(summary.moves, 2);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.final_hash, final_hash);
    assert!(summary.solved);
}

#[test]
fn mixed_moves_and_drags_replay() {
    let config = PuzzleConfig {
        seed: 17,
        ..PuzzleConfig::with_dims(4, 4)
    };
    let mut puzzle = Puzzle::new(config).unwrap();
    let mut buf = Vec::new();
    let mut writer = ReplayWriter::new(&mut buf, &InitDescriptor::of(&puzzle)).unwrap();

    for i in 0..40usize {
        let unit = puzzle.state().pieces()[(i * 7) % 16].unit_id;
        if i % 3 == 0 {
            let d_rows = (i % 5) as i64 - 2;
            let d_cols = (i % 4) as i64 - 2;
            writer.record_drag(&puzzle.try_drag(unit, d_rows, d_cols)).unwrap();
        } else {
            let delta = if i % 2 == 0 { 1 } else { -4 };
            writer.record(&puzzle.try_move(unit, delta)).unwrap();
        }
    }
    let frames = writer.frames_written();
    let final_hash = state_hash(puzzle.state());
    drop(writer);

    let summary = replay_and_compare(ReplayReader::open(buf.as_slice()).unwrap()).unwrap();
    assert_eq!(summary.moves, frames);
    assert_eq!(summary.final_hash, final_hash);
}
