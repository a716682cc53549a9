//! Per-move metrics and cumulative session counters.
//!
//! [`MoveMetrics`] captures timing and connectivity data for a single
//! move. [`SessionStats`] accumulates outcomes over the life of a
//! [`Puzzle`](crate::Puzzle) and is cleared by a reset.

use grout_core::{MoveError, MoveEvent};

/// Timing and connectivity metrics collected during a single move.
///
/// All durations are in microseconds. Rejected moves report only
/// `total_us` and `resolve_us`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveMetrics {
    /// Wall-clock time for the entire move, in microseconds.
    pub total_us: u64,
    /// Time spent in the movement resolver, in microseconds.
    pub resolve_us: u64,
    /// Time spent recomputing the unit partition, in microseconds.
    pub connectivity_us: u64,
    /// Number of pieces in the moving unit.
    pub unit_size: usize,
    /// Obstacles pushed into vacated cells.
    pub obstacles_pushed: usize,
    /// Pieces detached by the split pass.
    pub pieces_split: usize,
    /// Unions performed by the merge pass.
    pub unions: usize,
    /// Number of units after the move.
    pub unit_count: usize,
}

/// Cumulative outcome counters for a puzzle session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Moves accepted and committed.
    pub accepted: u64,
    /// Moves rejected, all reasons.
    pub rejected: u64,
    /// Rejections because the unit did not exist.
    pub unknown_unit: u64,
    /// Rejections because a piece would leave the grid.
    pub out_of_bounds: u64,
    /// Rejections because a horizontal step would wrap rows.
    pub row_wrap: u64,
    /// Rejections because obstacles outnumbered vacated cells.
    pub insufficient_space: u64,
    /// `Merge` events emitted.
    pub merges: u64,
    /// `Complete` events emitted.
    pub completions: u64,
}

impl SessionStats {
    /// Record an accepted move and the event it emitted.
    pub fn record_accepted(&mut self, event: Option<MoveEvent>) {
        self.accepted += 1;
        match event {
            Some(MoveEvent::Merge) => self.merges += 1,
            Some(MoveEvent::Complete) => self.completions += 1,
            Some(MoveEvent::Error) | None => {}
        }
    }

    /// Record a rejected move.
    pub fn record_rejected(&mut self, err: &MoveError) {
        self.rejected += 1;
        match err {
            MoveError::UnknownUnit { .. } => self.unknown_unit += 1,
            MoveError::OutOfBounds { .. } => self.out_of_bounds += 1,
            MoveError::RowWrapViolation { .. } => self.row_wrap += 1,
            MoveError::InsufficientSpace { .. } => self.insufficient_space += 1,
        }
    }

    /// Total moves attempted.
    pub fn attempted(&self) -> u64 {
        self.accepted + self.rejected
    }
}
