//! State comparison and replay verification.
//!
//! [`replay_and_compare`] rebuilds the recorded puzzle from the header,
//! re-issues every recorded move, and checks the outcome, the event and
//! the state hash of each one. The first divergence is an error.

use std::io::Read;

use grout_engine::GridState;

use crate::error::ReplayError;
use grout_engine::hash::state_hash;
use crate::reader::ReplayReader;

/// Totals from a replay that matched its recording.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Frames replayed.
    pub moves: u64,
    /// Moves that were accepted.
    pub accepted: u64,
    /// Moves that were rejected.
    pub rejected: u64,
    /// Hash of the final state.
    pub final_hash: u64,
    /// Whether the final state is solved.
    pub solved: bool,
}

/// Check a replayed state against a recorded hash.
pub fn compare_state(
    replayed: &GridState,
    recorded_hash: u64,
    move_index: u64,
) -> Result<(), ReplayError> {
    let replayed_hash = state_hash(replayed);
    if replayed_hash == recorded_hash {
        Ok(())
    } else {
        Err(ReplayError::SnapshotMismatch {
            move_index,
            recorded: recorded_hash,
            replayed: replayed_hash,
        })
    }
}

/// Replay a recorded session on a fresh puzzle and verify every move.
pub fn replay_and_compare<R: Read>(
    mut reader: ReplayReader<R>,
) -> Result<ReplaySummary, ReplayError> {
    let mut puzzle = reader.init_descriptor().to_puzzle()?;
    let mut summary = ReplaySummary {
        final_hash: state_hash(puzzle.state()),
        solved: puzzle.is_solved(),
        ..ReplaySummary::default()
    };

    while let Some(frame) = reader.next_frame()? {
        if frame.move_index != summary.moves {
            return Err(ReplayError::MalformedFrame {
                detail: format!(
                    "expected move {}, found move {}",
                    summary.moves, frame.move_index
                ),
            });
        }

        let report = puzzle.try_move(frame.unit, frame.delta);
        let accepted = report.outcome.is_accepted();
        if accepted != frame.accepted || report.event != frame.event {
            return Err(ReplayError::OutcomeMismatch {
                move_index: frame.move_index,
                detail: format!(
                    "recorded accepted={} event={:?}, replayed accepted={} event={:?}",
                    frame.accepted, frame.event, accepted, report.event
                ),
            });
        }
        compare_state(report.state, frame.state_hash, frame.move_index)?;

        summary.moves += 1;
        if accepted {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
        }
        summary.final_hash = frame.state_hash;
        summary.solved = report.state.is_solved();
    }

    Ok(summary)
}
