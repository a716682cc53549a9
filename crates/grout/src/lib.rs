//! Grout: a sliding-puzzle grid engine whose pieces fuse into rigid units.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Grout sub-crates. For most users, adding `grout` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grout::prelude::*;
//!
//! // A 1x3 board with the first two pieces swapped.
//! let config = PuzzleConfig::with_dims(1, 3);
//! let mut puzzle = Puzzle::with_layout(config, &[1, 0, 2]).unwrap();
//! assert!(!puzzle.is_solved());
//!
//! // Slide piece 0's unit one cell left; piece 1 is pushed into the gap.
//! let report = puzzle.try_move(UnitId(0), -1);
//! assert!(report.outcome.is_accepted());
//! assert_eq!(report.event, Some(MoveEvent::Complete));
//! assert_eq!(report.state.unit_count(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grout-core` | IDs, pieces, commands, events, errors |
//! | [`space`] | `grout-space` | Grid geometry and adjacency |
//! | [`engine`] | `grout-engine` | Move resolution, connectivity, the puzzle session |
//! | [`replay`] | `grout-replay` | Deterministic move recording and verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`grout-core`).
///
/// Contains [`types::Piece`], [`types::MoveCommand`], the
/// [`types::MoveEvent`] a move emits, and the error types.
pub use grout_core as types;

/// Grid geometry (`grout-space`).
///
/// [`space::Grid`] maps linear cell indices to coordinates and answers
/// adjacency and row questions.
pub use grout_space as space;

/// The puzzle engine (`grout-engine`).
///
/// [`engine::Puzzle`] owns a board and applies moves transactionally.
/// The building blocks ([`engine::resolve`], [`engine::connectivity`])
/// are public for callers that drive state by hand.
pub use grout_engine as engine;

/// Deterministic replay recording and verification (`grout-replay`).
///
/// Record sessions with [`replay::ReplayWriter`], replay and verify
/// determinism with [`replay::replay_and_compare`].
pub use grout_replay as replay;

/// Common imports for typical Grout usage.
///
/// ```rust
/// use grout::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use grout_core::{Direction, MoveCommand, MoveEvent, Piece, PieceId, UnitId};

    // Errors
    pub use grout_core::{LayoutError, MoveError};

    // Space
    pub use grout_space::Grid;

    // Engine
    pub use grout_engine::{
        ConfigError, DragReport, GridState, MoveOutcome, MoveReport, ObstaclePlacement, Puzzle,
        PuzzleConfig,
    };
}
