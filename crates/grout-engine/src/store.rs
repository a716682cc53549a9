//! Grid state store and unit-id allocation.
//!
//! The store holds the committed [`GridState`] together with the
//! [`UnitIdAllocator`] that mints ids for pieces split off a unit.
//! Transactions work on copies of both and hand them back through
//! [`StateStore::commit`]; a rejected move simply never commits.

use grout_core::UnitId;

use crate::state::GridState;

/// Monotonic source of fresh unit ids.
///
/// Starts one past the largest id in use, so every minted id is
/// greater than any id that already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitIdAllocator {
    next: u64,
}

impl UnitIdAllocator {
    /// An allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// An allocator for `state`: the first id is one past its largest unit id.
    pub fn for_state(state: &GridState) -> Self {
        let next = state
            .pieces()
            .iter()
            .map(|p| p.unit_id.0 + 1)
            .max()
            .unwrap_or(0);
        Self { next }
    }

    /// Mint a new unit id.
    pub fn mint(&mut self) -> UnitId {
        let id = UnitId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`mint()`](Self::mint) returns.
    pub fn peek(&self) -> UnitId {
        UnitId(self.next)
    }
}

/// Holds the committed state; accepts only whole-state replacement.
#[derive(Clone, Debug)]
pub struct StateStore {
    state: GridState,
    unit_ids: UnitIdAllocator,
}

impl StateStore {
    /// A store holding `state`.
    pub fn new(state: GridState) -> Self {
        let unit_ids = UnitIdAllocator::for_state(&state);
        Self { state, unit_ids }
    }

    /// The committed state.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// A copy of the allocator for a transaction to mint from.
    pub fn unit_ids(&self) -> UnitIdAllocator {
        self.unit_ids
    }

    /// Replace the state and allocator with the results of a transaction.
    pub fn commit(&mut self, next: GridState, unit_ids: UnitIdAllocator) {
        debug_assert!(next.is_permutation(), "commit would break the cell permutation");
        debug_assert_eq!(next.grid(), self.state.grid(), "grid dimensions are fixed");
        self.state = next;
        self.unit_ids = unit_ids;
    }
}
