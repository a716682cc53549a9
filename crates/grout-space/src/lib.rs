//! Rectangular grid geometry for Grout puzzles.
//!
//! Cells are addressed by a row-major linear index (`row * cols + col`).
//! [`Grid`] converts between linear indices and [`Cell`] coordinates and
//! answers the adjacency questions the engine asks: are two cells
//! orthogonal neighbours, what is the signed [`Offset`] between them,
//! and does a linear displacement keep a cell in its row.
//!
//! The grid has absorbing edges: cells on the border simply have fewer
//! neighbours, nothing wraps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Cell, Offset};
pub use error::SpaceError;
pub use grid::Grid;
