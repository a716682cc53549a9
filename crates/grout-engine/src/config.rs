//! Puzzle configuration, validation, and error types.
//!
//! [`PuzzleConfig`] is the builder-input for constructing a
//! [`Puzzle`](crate::Puzzle). [`validate()`](PuzzleConfig::validate)
//! checks the grid dimensions and returns the [`Grid`] they describe.

use std::error::Error;
use std::fmt;

use grout_core::LayoutError;
use grout_space::{Grid, SpaceError};

// ── ObstaclePlacement ─────────────────────────────────────────────

/// How pushed obstacles are assigned to the cells a moving unit vacates.
///
/// Only matters when one move pushes more than one obstacle; with a
/// single obstacle both policies pick the same cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObstaclePlacement {
    /// Obstacles, in piece-id order, each take the smallest remaining
    /// vacated cell when the delta is positive and the largest when it
    /// is negative.
    #[default]
    Extreme,
    /// Obstacles sorted by position are paired in order with the
    /// vacated cells at the same extreme, so their relative order on
    /// the grid is preserved.
    OrderPreserving,
}

impl ObstaclePlacement {
    /// Stable one-byte tag, used by the replay format.
    pub fn tag(self) -> u8 {
        match self {
            Self::Extreme => 0,
            Self::OrderPreserving => 1,
        }
    }

    /// Inverse of [`tag()`](Self::tag).
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Extreme),
            1 => Some(Self::OrderPreserving),
            _ => None,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimensions are invalid.
    Space(SpaceError),
    /// The initial piece layout is not a permutation of the grid cells.
    Layout(LayoutError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Layout(e) => write!(f, "layout: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Layout(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ── PuzzleConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Grid rows. Default: 3.
    pub rows: u32,
    /// Grid columns. Default: 3.
    pub cols: u32,
    /// Seed for the scrambled layout of [`Puzzle::new`](crate::Puzzle::new). Default: 0.
    pub seed: u64,
    /// Obstacle placement policy. Default: [`ObstaclePlacement::Extreme`].
    pub placement: ObstaclePlacement,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            seed: 0,
            placement: ObstaclePlacement::Extreme,
        }
    }
}

impl PuzzleConfig {
    /// A default configuration with the given dimensions.
    pub fn with_dims(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Validate the dimensions and build the grid they describe.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols)?)
    }
}
