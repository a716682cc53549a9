//! Movement resolver: validates a unit displacement and computes the
//! resulting arrangement, pushing obstacles into the cells the unit
//! leaves behind.
//!
//! Resolution is pure. It reads a [`GridState`] and returns the new
//! position of every piece; nothing is written until the caller commits.

use std::collections::VecDeque;

use grout_core::{MoveCommand, MoveError, PieceId};
use smallvec::SmallVec;

use crate::config::ObstaclePlacement;
use crate::state::GridState;

/// The arrangement produced by an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// New position of every piece, indexed by piece id.
    pub positions: Vec<usize>,
    /// Number of pieces in the moving unit.
    pub unit_size: usize,
    /// Obstacles pushed into vacated cells, as `(piece, from, to)`.
    pub pushed: SmallVec<[(PieceId, usize, usize); 4]>,
}

/// Resolve `cmd` against `state`.
///
/// Checks, in order: the unit exists, every target is on the grid, a
/// single horizontal step stays within each piece's row, and there are
/// at least as many vacated cells as obstacles. On success the unit is
/// translated by `cmd.delta` and each obstacle is assigned a vacated
/// cell according to `placement`.
pub fn resolve_move(
    state: &GridState,
    cmd: MoveCommand,
    placement: ObstaclePlacement,
) -> Result<Resolution, MoveError> {
    let grid = state.grid();
    let pieces = state.pieces();

    let members: SmallVec<[usize; 8]> = pieces
        .iter()
        .enumerate()
        .filter(|(_, p)| p.unit_id == cmd.unit)
        .map(|(i, _)| i)
        .collect();
    if members.is_empty() {
        return Err(MoveError::UnknownUnit { unit: cmd.unit });
    }

    let mut targets: SmallVec<[usize; 8]> = SmallVec::with_capacity(members.len());
    for &i in &members {
        let p = &pieces[i];
        match grid.translate(p.current_pos, cmd.delta) {
            Some(t) => targets.push(t),
            None => {
                return Err(MoveError::OutOfBounds {
                    piece: p.id,
                    target: (p.current_pos as i64).saturating_add(cmd.delta),
                    cell_count: grid.cell_count(),
                })
            }
        }
    }

    if cmd.delta.unsigned_abs() == 1 {
        for (&i, &t) in members.iter().zip(&targets) {
            let p = &pieces[i];
            if !grid.same_row(p.current_pos, t) {
                return Err(MoveError::RowWrapViolation {
                    piece: p.id,
                    from: p.current_pos,
                    to: t,
                });
            }
        }
    }

    let mut in_unit = vec![false; pieces.len()];
    for &i in &members {
        in_unit[i] = true;
    }
    let mut is_target = vec![false; grid.cell_count()];
    for &t in &targets {
        is_target[t] = true;
    }

    let occupant = state.occupancy();
    let mut obstacles: SmallVec<[PieceId; 4]> = targets
        .iter()
        .map(|&t| occupant[t])
        .filter(|id| !in_unit[id.index()])
        .collect();
    obstacles.sort_unstable();

    let mut vacated: SmallVec<[usize; 4]> = members
        .iter()
        .map(|&i| pieces[i].current_pos)
        .filter(|&pos| !is_target[pos])
        .collect();
    vacated.sort_unstable();

    if obstacles.len() > vacated.len() {
        return Err(MoveError::InsufficientSpace {
            obstacles: obstacles.len(),
            vacated: vacated.len(),
        });
    }

    let mut positions = state.positions();
    for (&i, &t) in members.iter().zip(&targets) {
        positions[i] = t;
    }

    let assignment = assign_slots(state, &obstacles, &vacated, cmd.delta, placement);
    let mut pushed = SmallVec::with_capacity(assignment.len());
    for (id, slot) in assignment {
        pushed.push((id, positions[id.index()], slot));
        positions[id.index()] = slot;
    }

    Ok(Resolution {
        positions,
        unit_size: members.len(),
        pushed,
    })
}

/// Pair each obstacle with a vacated cell.
///
/// `obstacles` is in piece-id order and `vacated` is ascending.
fn assign_slots(
    state: &GridState,
    obstacles: &[PieceId],
    vacated: &[usize],
    delta: i64,
    placement: ObstaclePlacement,
) -> SmallVec<[(PieceId, usize); 4]> {
    match placement {
        ObstaclePlacement::Extreme => {
            let mut free: VecDeque<usize> = vacated.iter().copied().collect();
            obstacles
                .iter()
                .filter_map(|&id| {
                    let slot = if delta > 0 {
                        free.pop_front()
                    } else {
                        free.pop_back()
                    };
                    slot.map(|s| (id, s))
                })
                .collect()
        }
        ObstaclePlacement::OrderPreserving => {
            let mut by_pos: SmallVec<[PieceId; 4]> = obstacles.iter().copied().collect();
            by_pos.sort_by_key(|id| state.pieces()[id.index()].current_pos);
            let n = by_pos.len();
            let slots = if delta > 0 {
                &vacated[..n]
            } else {
                &vacated[vacated.len() - n..]
            };
            by_pos.into_iter().zip(slots.iter().copied()).collect()
        }
    }
}
