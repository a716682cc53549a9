//! Deterministic move recording and verification for Grout puzzles.
//!
//! Records the moves of a [`Puzzle`](grout_engine::Puzzle) session and
//! replays them to prove the engine reproduces the same states. Every
//! frame carries an FNV-1a hash of the state committed by its move.
//!
//! # Architecture
//!
//! - [`ReplayWriter`] records frames to any `Write` sink
//! - [`ReplayReader`] plays back frames from any `Read` source
//! - [`compare_state`] and [`replay_and_compare`] verify determinism
//! - All I/O uses a small binary codec (no serde dependency)
//!
//! # Format
//!
//! ```text
//! [MAGIC "GRUT"] [VERSION u8] [InitDescriptor]
//! [Frame 0] [Frame 1] ... [Frame N-1]
//! ```
//!
//! Each frame holds the move index, the unit and delta that were
//! requested, whether the move was accepted, the event it emitted, and
//! the hash of the resulting state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

pub use compare::{compare_state, replay_and_compare, ReplaySummary};
pub use error::ReplayError;
pub use grout_engine::hash::{layout_hash, state_hash};
pub use reader::{FrameIter, ReplayReader};
pub use types::{Frame, InitDescriptor};
pub use writer::ReplayWriter;

/// Magic bytes at the start of every replay file.
pub const MAGIC: [u8; 4] = *b"GRUT";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
