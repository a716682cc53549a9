//! Sliding-puzzle engine for Grout.
//!
//! Provides [`Puzzle`], which owns a [`GridState`] and applies moves to
//! it as whole transactions:
//!
//! 1. [`resolve`] validates the displacement and pushes obstacles into
//!    the cells the moving unit vacates.
//! 2. [`connectivity`] splits pieces that lost their alignment and
//!    merges units that gained one.
//! 3. [`solve`] checks whether every piece is home.
//! 4. [`emit`] turns the outcome into at most one
//!    [`MoveEvent`](grout_core::MoveEvent).
//!
//! Rejected moves never commit. Every move reports [`MoveMetrics`] and
//! updates the session's [`SessionStats`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod connectivity;
pub mod emit;
pub mod hash;
pub mod metrics;
pub mod puzzle;
pub mod resolve;
pub mod scramble;
pub mod solve;
pub mod state;
pub mod store;

pub use config::{ConfigError, ObstaclePlacement, PuzzleConfig};
pub use connectivity::{aligned, ConnectivityReport};
pub use hash::{layout_hash, state_hash};
pub use metrics::{MoveMetrics, SessionStats};
pub use puzzle::{DragReport, MoveOutcome, MoveReport, Puzzle, StepRecord};
pub use resolve::Resolution;
pub use state::{GridState, UnitMembers};
pub use store::{StateStore, UnitIdAllocator};
