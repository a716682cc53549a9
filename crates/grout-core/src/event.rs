//! Feedback events emitted after each move.

use std::fmt;

/// The single event a move produces for feedback collaborators.
///
/// A move that changes nothing observable (a unit sliding into empty
/// space without touching anything) emits no event at all, which is
/// represented as `Option<MoveEvent>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveEvent {
    /// The move was rejected; the state is unchanged.
    Error,
    /// At least one piece changed unit.
    Merge,
    /// The puzzle became solved with this move.
    Complete,
}

impl fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Merge => write!(f, "MERGE"),
            Self::Complete => write!(f, "COMPLETE"),
        }
    }
}
