//! Puzzle session: the user-facing move API.
//!
//! [`Puzzle`] runs every move as one transaction: resolve the
//! displacement, recompute connectivity, detect the solved state,
//! classify the event, then commit. A rejected move never reaches the
//! commit, so the state it leaves behind is the state it found.
//!
//! # Ownership model
//!
//! `Puzzle` is [`Send`]. All mutating methods take `&mut self`, and
//! [`try_move()`](Puzzle::try_move) returns a [`MoveReport`] that
//! borrows the committed state from `self`. The caller cannot issue the
//! next move while holding a report, so no intermediate state is ever
//! observable.

use std::time::Instant;

use grout_core::{Direction, MoveCommand, MoveError, MoveEvent, PieceId, UnitId};
use grout_space::Grid;
use indexmap::IndexMap;

use crate::config::{ConfigError, ObstaclePlacement, PuzzleConfig};
use crate::connectivity;
use crate::emit::classify;
use crate::hash::state_hash;
use crate::metrics::{MoveMetrics, SessionStats};
use crate::resolve::resolve_move;
use crate::scramble::scrambled_layout;
use crate::solve;
use crate::state::{GridState, UnitMembers};
use crate::store::StateStore;

// Compile-time assertion: Puzzle is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Puzzle>();
    }
};

// ── MoveOutcome ─────────────────────────────────────────────────

/// Whether a move was committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed.
    Accepted {
        /// Connectivity rewrote at least one piece's unit id.
        units_changed: bool,
        /// The puzzle went from unsolved to solved.
        solved_now: bool,
    },
    /// The move was refused; the state is untouched.
    Rejected(MoveError),
}

impl MoveOutcome {
    /// Whether the move was committed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<MoveError> {
        match self {
            Self::Rejected(e) => Some(*e),
            Self::Accepted { .. } => None,
        }
    }
}

// ── Reports ─────────────────────────────────────────────────────

/// Result of [`Puzzle::try_move()`] and [`Puzzle::try_step()`].
#[derive(Debug)]
pub struct MoveReport<'p> {
    /// The command that was applied.
    pub command: MoveCommand,
    /// Accepted or rejected.
    pub outcome: MoveOutcome,
    /// The single event for feedback collaborators, if any.
    pub event: Option<MoveEvent>,
    /// The committed state after the move.
    pub state: &'p GridState,
    /// [`state_hash`](crate::hash::state_hash) of [`state`](Self::state).
    pub state_hash: u64,
    /// Metrics for this move.
    pub metrics: MoveMetrics,
}

/// One single-axis step of a drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// The step as issued, with the unit id current at that moment.
    pub command: MoveCommand,
    /// Accepted or rejected.
    pub outcome: MoveOutcome,
    /// Event emitted by this step.
    pub event: Option<MoveEvent>,
    /// [`state_hash`](crate::hash::state_hash) of the committed state after this step.
    pub state_hash: u64,
}

/// Result of [`Puzzle::try_drag()`].
#[derive(Debug)]
pub struct DragReport<'p> {
    /// Steps attempted, in order. Only the last can be rejected.
    pub steps: Vec<StepRecord>,
    /// The committed state after the last accepted step.
    pub state: &'p GridState,
}

impl DragReport<'_> {
    /// Whether every step of the drag was accepted.
    pub fn completed(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.is_accepted())
    }

    /// Number of accepted steps.
    pub fn accepted_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome.is_accepted())
            .count()
    }

    /// Events of all steps, in order, skipping quiet steps.
    pub fn events(&self) -> impl Iterator<Item = MoveEvent> + '_ {
        self.steps.iter().filter_map(|s| s.event)
    }
}

// ── Puzzle ──────────────────────────────────────────────────────

/// A puzzle session over one grid.
///
/// # Example
///
/// ```
/// use grout_engine::{Puzzle, PuzzleConfig};
/// use grout_core::{MoveEvent, UnitId};
///
/// // pieces 0 and 1 swapped on a 3x3 grid
/// let layout = [1, 0, 2, 3, 4, 5, 6, 7, 8];
/// let mut puzzle = Puzzle::with_layout(PuzzleConfig::default(), &layout).unwrap();
/// let report = puzzle.try_move(UnitId(1), 1);
/// assert_eq!(report.event, Some(MoveEvent::Complete));
/// assert!(report.state.is_solved());
/// ```
pub struct Puzzle {
    config: PuzzleConfig,
    grid: Grid,
    initial: GridState,
    store: StateStore,
    stats: SessionStats,
    last_metrics: MoveMetrics,
}

impl Puzzle {
    /// A puzzle scrambled from `config.seed`.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let layout = scrambled_layout(grid, config.seed);
        Self::with_layout(config, &layout)
    }

    /// A puzzle with piece `i` on cell `layout[i]`, each in its own unit.
    ///
    /// The initial partition is taken as given; connectivity first runs
    /// after the first accepted move.
    pub fn with_layout(config: PuzzleConfig, layout: &[usize]) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let initial = GridState::from_layout(grid, layout)?;
        Ok(Self::from_initial(config, grid, initial))
    }

    /// A puzzle with every piece already home.
    pub fn solved(config: PuzzleConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        Ok(Self::from_initial(config, grid, GridState::solved(grid)))
    }

    fn from_initial(config: PuzzleConfig, grid: Grid, initial: GridState) -> Self {
        Self {
            config,
            grid,
            store: StateStore::new(initial.clone()),
            initial,
            stats: SessionStats::default(),
            last_metrics: MoveMetrics::default(),
        }
    }

    /// Move `unit` by the linear displacement `delta`.
    ///
    /// Never fails: a refused move is reported as
    /// [`MoveOutcome::Rejected`] with a [`MoveEvent::Error`] event and
    /// leaves the state untouched.
    pub fn try_move(&mut self, unit: UnitId, delta: i64) -> MoveReport<'_> {
        let command = MoveCommand::new(unit, delta);
        let record = self.transact(command);
        MoveReport {
            command,
            outcome: record.outcome,
            event: record.event,
            state: self.store.state(),
            state_hash: record.state_hash,
            metrics: self.last_metrics.clone(),
        }
    }

    /// Move `unit` one cell in `dir`.
    pub fn try_step(&mut self, unit: UnitId, dir: Direction) -> MoveReport<'_> {
        self.try_move(unit, dir.delta(self.grid.cols()))
    }

    /// Drag `unit` by `d_rows` rows and `d_cols` columns.
    ///
    /// The gesture is broken into single-axis unit steps, columns first,
    /// each committed as its own move. The drag stops at the first
    /// rejected step. Because a merge can rename the moving unit, the
    /// unit is followed through its lowest-numbered piece.
    pub fn try_drag(&mut self, unit: UnitId, d_rows: i64, d_cols: i64) -> DragReport<'_> {
        let anchor = self.store.state().unit_members(unit).first().copied();
        let horizontal = if d_cols < 0 { Direction::Left } else { Direction::Right };
        let vertical = if d_rows < 0 { Direction::Up } else { Direction::Down };
        let plan = std::iter::repeat(horizontal)
            .take(d_cols.unsigned_abs() as usize)
            .chain(std::iter::repeat(vertical).take(d_rows.unsigned_abs() as usize));

        let mut steps = Vec::new();
        let mut current = unit;
        for dir in plan {
            let record = self.transact(MoveCommand::step(current, dir, self.grid.cols()));
            let rejected = !record.outcome.is_accepted();
            steps.push(record);
            if rejected {
                break;
            }
            if let Some(u) = anchor.and_then(|p| self.store.state().unit_of(p)) {
                current = u;
            }
        }
        DragReport {
            steps,
            state: self.store.state(),
        }
    }

    /// The committed state.
    pub fn state(&self) -> &GridState {
        self.store.state()
    }

    /// The state the puzzle started from.
    pub fn initial(&self) -> &GridState {
        &self.initial
    }

    /// The current unit partition.
    pub fn units(&self) -> IndexMap<UnitId, UnitMembers> {
        self.store.state().units()
    }

    /// The unit `piece` currently belongs to.
    pub fn unit_of(&self, piece: PieceId) -> Option<UnitId> {
        self.store.state().unit_of(piece)
    }

    /// Whether every piece is home.
    pub fn is_solved(&self) -> bool {
        self.store.state().is_solved()
    }

    /// Grid dimensions.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The configuration this puzzle was built from.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// The obstacle placement policy in force.
    pub fn placement(&self) -> ObstaclePlacement {
        self.config.placement
    }

    /// Cumulative counters since construction or the last reset.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Metrics from the most recent move.
    pub fn last_metrics(&self) -> &MoveMetrics {
        &self.last_metrics
    }

    /// Return to the initial state and clear all counters.
    pub fn reset(&mut self) -> &GridState {
        self.store = StateStore::new(self.initial.clone());
        self.stats = SessionStats::default();
        self.last_metrics = MoveMetrics::default();
        self.store.state()
    }

    fn transact(&mut self, command: MoveCommand) -> StepRecord {
        let start = Instant::now();
        let resolved = resolve_move(self.store.state(), command, self.config.placement);
        let resolve_us = start.elapsed().as_micros() as u64;

        let resolution = match resolved {
            Ok(r) => r,
            Err(err) => {
                self.stats.record_rejected(&err);
                self.last_metrics = MoveMetrics {
                    total_us: start.elapsed().as_micros() as u64,
                    resolve_us,
                    ..MoveMetrics::default()
                };
                return StepRecord {
                    command,
                    outcome: MoveOutcome::Rejected(err),
                    event: classify(None),
                    state_hash: state_hash(self.store.state()),
                };
            }
        };

        let was_solved = self.store.state().is_solved();
        let mut pieces = self.store.state().pieces().to_vec();
        for (p, &pos) in pieces.iter_mut().zip(&resolution.positions) {
            p.current_pos = pos;
        }

        let conn_start = Instant::now();
        let mut unit_ids = self.store.unit_ids();
        let report = connectivity::recompute(self.grid, &mut pieces, &mut unit_ids);
        let connectivity_us = conn_start.elapsed().as_micros() as u64;

        let solved = solve::is_solved(self.grid, &pieces);
        let solved_now = solved && !was_solved;
        let event = classify(Some((report.units_changed, solved_now)));

        self.store
            .commit(GridState::from_parts(self.grid, pieces, solved), unit_ids);
        self.stats.record_accepted(event);
        self.last_metrics = MoveMetrics {
            total_us: start.elapsed().as_micros() as u64,
            resolve_us,
            connectivity_us,
            unit_size: resolution.unit_size,
            obstacles_pushed: resolution.pushed.len(),
            pieces_split: report.pieces_split,
            unions: report.unions,
            unit_count: report.unit_count,
        };

        StepRecord {
            command,
            outcome: MoveOutcome::Accepted {
                units_changed: report.units_changed,
                solved_now,
            },
            event,
            state_hash: state_hash(self.store.state()),
        }
    }
}

impl std::fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Puzzle")
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("placement", &self.config.placement)
            .field("units", &self.store.state().unit_count())
            .field("solved", &self.store.state().is_solved())
            .field("moves", &self.stats.attempted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grout_test_utils::{assert_permutation, reversed_layout, solved_layout, swapped_layout};

    fn puzzle(rows: u32, cols: u32, layout: &[usize]) -> Puzzle {
        Puzzle::with_layout(PuzzleConfig::with_dims(rows, cols), layout).unwrap()
    }

    #[test]
    fn swap_back_completes_and_merges() {
        let mut p = puzzle(3, 3, &swapped_layout(3, 3, 0, 1));
        let report = p.try_move(UnitId(1), 1);
        assert_eq!(
            report.outcome,
            MoveOutcome::Accepted {
                units_changed: true,
                solved_now: true
            }
        );
        assert_eq!(report.event, Some(MoveEvent::Complete));
        assert!(report.state.is_solved());
        assert_eq!(report.state.unit_count(), 1);
        assert_eq!(report.metrics.obstacles_pushed, 1);
    }

    #[test]
    fn out_of_bounds_leaves_state_untouched() {
        let mut p = puzzle(3, 3, &swapped_layout(3, 3, 0, 1));
        let before = p.state().clone();
        let report = p.try_move(UnitId(1), -1);
        assert_eq!(report.event, Some(MoveEvent::Error));
        assert!(matches!(
            report.outcome,
            MoveOutcome::Rejected(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(*report.state, before);
        assert_eq!(p.stats().out_of_bounds, 1);
    }

    #[test]
    fn quiet_move_emits_nothing() {
        // reversed 3x3: no pair is aligned before or after the jump
        let mut p = puzzle(3, 3, &reversed_layout(3, 3));
        let report = p.try_move(UnitId(4), -2);
        assert!(report.outcome.is_accepted());
        assert_eq!(report.state.positions()[4], 2);
        assert_eq!(report.state.positions()[6], 4);
        assert_eq!(report.event, None);
    }

    #[test]
    fn zero_delta_is_accepted_quietly() {
        let mut p = puzzle(2, 2, &reversed_layout(2, 2));
        let before = p.state().clone();
        let report = p.try_move(UnitId(0), 0);
        assert!(report.outcome.is_accepted());
        assert_eq!(report.event, None);
        assert_eq!(*report.state, before);
    }

    #[test]
    fn step_uses_grid_width() {
        let mut p = puzzle(3, 3, &swapped_layout(3, 3, 0, 3));
        // piece 3 is on cell 0; stepping down swaps it back with piece 0
        let report = p.try_step(UnitId(3), Direction::Down);
        assert_eq!(report.command.delta, 3);
        assert_eq!(report.event, Some(MoveEvent::Complete));
    }

    #[test]
    fn drag_follows_renamed_unit() {
        // 1x4 strip: piece 1 on cell 3 joins piece 0 after one step left,
        // and the merged unit keeps id 0 for the second step
        let mut p = puzzle(1, 4, &[1, 3, 0, 2]);
        let report = p.try_drag(UnitId(1), 0, -2);
        assert!(report.completed());
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].command.unit, UnitId(1));
        assert_eq!(report.steps[0].event, Some(MoveEvent::Merge));
        assert_eq!(report.steps[1].command.unit, UnitId(0));
        assert!(report.state.is_solved());
        assert_eq!(report.events().last(), Some(MoveEvent::Complete));
    }

    #[test]
    fn drag_steps_carry_the_hash_of_their_state() {
        let mut p = puzzle(1, 4, &[1, 3, 0, 2]);
        let start = state_hash(p.state());
        let report = p.try_drag(UnitId(1), 0, -2);
        let first = report.steps[0].state_hash;
        let last = report.steps[1].state_hash;
        assert_ne!(first, start);
        assert_ne!(first, last);
        assert_eq!(last, state_hash(report.state));
    }

    #[test]
    fn rejected_move_reports_the_unchanged_hash() {
        let mut p = puzzle(1, 3, &[1, 0, 2]);
        let start = state_hash(p.state());
        let report = p.try_move(UnitId(0), 5);
        assert!(!report.outcome.is_accepted());
        assert_eq!(report.state_hash, start);
    }

    #[test]
    fn drag_stops_at_first_rejection() {
        let mut p = puzzle(3, 3, &swapped_layout(3, 3, 4, 8));
        // piece 8 is on the centre cell; three steps right hits the edge
        let report = p.try_drag(UnitId(8), 0, 3);
        assert!(!report.completed());
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.accepted_steps(), 1);
        assert!(matches!(
            report.steps[1].outcome,
            MoveOutcome::Rejected(MoveError::RowWrapViolation { .. })
        ));
    }

    #[test]
    fn drag_of_unknown_unit_is_rejected_immediately() {
        let mut p = puzzle(2, 2, &reversed_layout(2, 2));
        let report = p.try_drag(UnitId(77), 1, 1);
        assert_eq!(report.steps.len(), 1);
        assert_eq!(
            report.steps[0].outcome.error(),
            Some(MoveError::UnknownUnit { unit: UnitId(77) })
        );
    }

    #[test]
    fn empty_drag_does_nothing() {
        let mut p = puzzle(2, 2, &reversed_layout(2, 2));
        let report = p.try_drag(UnitId(0), 0, 0);
        assert!(report.steps.is_empty());
        assert!(report.completed());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut p = puzzle(3, 3, &swapped_layout(3, 3, 0, 1));
        p.try_move(UnitId(1), 1);
        assert!(p.is_solved());
        let state = p.reset().clone();
        assert_eq!(state, *p.initial());
        assert_eq!(p.stats().attempted(), 0);
        assert!(!p.is_solved());
    }

    #[test]
    fn scrambled_puzzle_is_deterministic() {
        let config = PuzzleConfig {
            seed: 99,
            ..PuzzleConfig::with_dims(4, 4)
        };
        let a = Puzzle::new(config.clone()).unwrap();
        let b = Puzzle::new(config).unwrap();
        assert_eq!(a.state(), b.state());
        assert!(!a.is_solved());
        assert_permutation(a.grid(), a.state().pieces());
    }

    #[test]
    fn solved_puzzle_starts_solved() {
        let p = Puzzle::solved(PuzzleConfig::with_dims(2, 5)).unwrap();
        assert!(p.is_solved());
        assert_eq!(p.state().positions(), solved_layout(2, 5));
        assert_eq!(p.state(), &GridState::solved(p.grid()));
        assert_eq!(p.state().unit_count(), 10);
    }

    #[test]
    fn bad_layout_is_a_config_error() {
        let err = Puzzle::with_layout(PuzzleConfig::with_dims(2, 2), &[0, 1, 2]).unwrap_err();
        assert!(matches!(err, ConfigError::Layout(_)));
    }

    #[test]
    fn debug_is_a_compact_summary() {
        let p = puzzle(2, 2, &reversed_layout(2, 2));
        let s = format!("{p:?}");
        assert!(s.starts_with("Puzzle"));
        assert!(s.contains("units: 4"));
    }
}
