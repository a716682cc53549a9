//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension exceeds the maximum the coordinate type supports.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The value supplied.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `rows * cols` does not fit in a `u32` piece id.
    CellCountOverflow {
        /// The offending cell count.
        value: u64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
