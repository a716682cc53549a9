//! Core types for the Grout sliding-puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: piece and unit
//! identifiers, the [`Piece`] record, move commands, the events a move
//! can emit, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod event;
pub mod id;
pub mod piece;

pub use command::{Direction, MoveCommand};
pub use error::{LayoutError, MoveError};
pub use event::MoveEvent;
pub use id::{PieceId, UnitId};
pub use piece::{HomeCell, Piece};
