//! Criterion micro-benchmarks for replay codec and state hashing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use grout_bench::{reference_profile, run_session, scripted_moves, stress_profile};
use grout_core::{MoveEvent, UnitId};
use grout_engine::Puzzle;
use grout_replay::codec::{decode_frame, encode_frame};
use grout_replay::{replay_and_compare, state_hash, Frame, InitDescriptor, ReplayReader, ReplayWriter};

fn make_frame(i: u64) -> Frame {
    Frame {
        move_index: i,
        unit: UnitId(i % 64),
        delta: if i % 2 == 0 { 1 } else { -8 },
        accepted: i % 3 != 0,
        event: if i % 5 == 0 { Some(MoveEvent::Merge) } else { None },
        state_hash: 0xDEADBEEF ^ i,
    }
}

/// Benchmark: Encode 1000 frames.
fn bench_codec_encode_frames(c: &mut Criterion) {
    let frames: Vec<Frame> = (0..1000).map(make_frame).collect();

    c.bench_function("codec_encode_1000_frames", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(34 * 1000);
            for frame in &frames {
                encode_frame(&mut buf, frame).unwrap();
            }
            black_box(&buf);
        });
    });
}

/// Benchmark: Decode 1000 frames.
fn bench_codec_decode_frames(c: &mut Criterion) {
    let mut buf = Vec::new();
    for i in 0..1000 {
        encode_frame(&mut buf, &make_frame(i)).unwrap();
    }

    c.bench_function("codec_decode_1000_frames", |b| {
        b.iter(|| {
            let mut cursor = buf.as_slice();
            while let Some(frame) = decode_frame(&mut cursor).unwrap() {
                black_box(&frame);
            }
        });
    });
}

/// Benchmark: Hash a 32x32 state.
fn bench_state_hash_32x32(c: &mut Criterion) {
    let puzzle = Puzzle::new(stress_profile(42)).unwrap();

    c.bench_function("state_hash_32x32", |b| {
        b.iter(|| black_box(state_hash(puzzle.state())));
    });
}

/// Benchmark: Replay and verify a recorded 500-move reference session.
fn bench_replay_reference_500(c: &mut Criterion) {
    let mut puzzle = Puzzle::new(reference_profile(42)).unwrap();
    let mut buf = Vec::new();
    {
        let mut writer = ReplayWriter::new(&mut buf, &InitDescriptor::of(&puzzle)).unwrap();
        let n = puzzle.state().pieces().len();
        for (piece, delta) in scripted_moves(8, 500, 42) {
            let unit = puzzle.state().pieces()[piece % n].unit_id;
            writer.record(&puzzle.try_move(unit, delta)).unwrap();
        }
    }

    c.bench_function("replay_reference_500", |b| {
        b.iter(|| {
            let reader = ReplayReader::open(buf.as_slice()).unwrap();
            black_box(replay_and_compare(reader).unwrap());
        });
    });
}

/// Benchmark: The same 500-move session played without recording.
fn bench_play_reference_500(c: &mut Criterion) {
    let script = scripted_moves(8, 500, 42);

    c.bench_function("play_reference_500", |b| {
        b.iter(|| {
            let mut puzzle = Puzzle::new(reference_profile(42)).unwrap();
            black_box(run_session(&mut puzzle, &script));
        });
    });
}

criterion_group!(
    benches,
    bench_codec_encode_frames,
    bench_codec_decode_frames,
    bench_state_hash_32x32,
    bench_replay_reference_500,
    bench_play_reference_500
);
criterion_main!(benches);
