//! Event classification for feedback collaborators.

use grout_core::MoveEvent;

/// Classify a move outcome into at most one event.
///
/// `accepted` is `None` for a rejected move. For an accepted move it
/// carries `(units_changed, solved_now)`: whether connectivity rewrote
/// any unit id, and whether the board went from unsolved to solved.
/// Completion outranks a merge.
pub fn classify(accepted: Option<(bool, bool)>) -> Option<MoveEvent> {
    match accepted {
        None => Some(MoveEvent::Error),
        Some((_, true)) => Some(MoveEvent::Complete),
        Some((true, false)) => Some(MoveEvent::Merge),
        Some((false, false)) => None,
    }
}
