//! Connectivity engine: recomputes the unit partition after a move.
//!
//! Two passes run in order:
//!
//! 1. **Split** detaches every piece that is no longer [`aligned`] with
//!    any other member of its unit. Detached pieces each receive a fresh
//!    id from the [`UnitIdAllocator`].
//! 2. **Merge** fuses units across every aligned pair of physically
//!    adjacent pieces. The result is the connected components of the
//!    graph whose edges are aligned pairs plus existing membership, which
//!    is what a repeated pairwise rewrite converges to. It is computed
//!    with a union-find over unit ids; the smallest id in each component
//!    survives.

use grout_core::{Piece, PieceId, UnitId};
use grout_space::{Cell, Grid};
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::state::occupancy;
use crate::store::UnitIdAllocator;

/// Summary of one connectivity recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectivityReport {
    /// Pieces detached into fresh singleton units by the split pass.
    pub pieces_split: usize,
    /// Unions performed by the merge pass.
    pub unions: usize,
    /// Whether any piece ended with a different unit id than it started.
    pub units_changed: bool,
    /// Number of distinct units afterwards.
    pub unit_count: usize,
}

/// Whether `p` and `q` sit next to each other exactly as they do in the
/// source image.
///
/// Requires home cells to be orthogonal neighbours and the signed offset
/// between current cells to equal the signed offset between home cells.
/// The second condition implies the pieces are physical neighbours.
pub fn aligned(grid: Grid, p: &Piece, q: &Piece) -> bool {
    let home = Cell::new(p.home.row, p.home.col).offset_to(Cell::new(q.home.row, q.home.col));
    home.is_orthogonal_unit() && grid.offset(p.current_pos, q.current_pos) == home
}

/// Run split then merge over `pieces`, minting ids from `ids`.
pub fn recompute(
    grid: Grid,
    pieces: &mut [Piece],
    ids: &mut UnitIdAllocator,
) -> ConnectivityReport {
    let before: Vec<UnitId> = pieces.iter().map(|p| p.unit_id).collect();
    let occupant = occupancy(grid, pieces);

    let pieces_split = split_with(grid, pieces, &occupant, ids);
    let unions = merge_with(grid, pieces, &occupant);

    let units_changed = pieces.iter().zip(&before).any(|(p, &b)| p.unit_id != b);
    ConnectivityReport {
        pieces_split,
        unions,
        units_changed,
        unit_count: count_units(pieces),
    }
}

/// Split pass alone. Returns the number of pieces detached.
pub fn split(grid: Grid, pieces: &mut [Piece], ids: &mut UnitIdAllocator) -> usize {
    let occupant = occupancy(grid, pieces);
    split_with(grid, pieces, &occupant, ids)
}

/// Merge pass alone. Returns the number of unions performed.
pub fn merge(grid: Grid, pieces: &mut [Piece]) -> usize {
    let occupant = occupancy(grid, pieces);
    merge_with(grid, pieces, &occupant)
}

fn split_with(
    grid: Grid,
    pieces: &mut [Piece],
    occupant: &[PieceId],
    ids: &mut UnitIdAllocator,
) -> usize {
    let mut sizes: IndexMap<UnitId, usize> = IndexMap::new();
    for p in pieces.iter() {
        *sizes.entry(p.unit_id).or_default() += 1;
    }

    // Every piece is judged against the membership as it was on entry.
    let detached: SmallVec<[usize; 8]> = pieces
        .iter()
        .enumerate()
        .filter(|(_, p)| sizes.get(&p.unit_id).copied().unwrap_or(0) > 1)
        .filter(|(_, p)| {
            !grid.neighbours(p.current_pos).into_iter().any(|cell| {
                let q = &pieces[occupant[cell].index()];
                q.unit_id == p.unit_id && aligned(grid, p, q)
            })
        })
        .map(|(i, _)| i)
        .collect();

    for &i in &detached {
        pieces[i].unit_id = ids.mint();
    }
    detached.len()
}

fn merge_with(grid: Grid, pieces: &mut [Piece], occupant: &[PieceId]) -> usize {
    let mut forest = UnitForest::new(pieces);
    let mut unions = 0;
    for cell in 0..grid.cell_count() {
        let p = &pieces[occupant[cell].index()];
        for next in grid.forward_neighbours(cell) {
            let q = &pieces[occupant[next].index()];
            if aligned(grid, p, q) && forest.union(p.unit_id, q.unit_id) {
                unions += 1;
            }
        }
    }
    if unions > 0 {
        for p in pieces.iter_mut() {
            p.unit_id = forest.root_id(p.unit_id);
        }
    }
    unions
}

fn count_units(pieces: &[Piece]) -> usize {
    let mut ids: SmallVec<[UnitId; 16]> = pieces.iter().map(|p| p.unit_id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}

// ── Union-find ─────────────────────────────────────────────────────

/// Disjoint sets over the unit ids present in one arrangement.
///
/// Roots always carry the smallest id of their set.
struct UnitForest {
    slots: IndexMap<UnitId, usize>,
    parent: Vec<usize>,
}

impl UnitForest {
    fn new(pieces: &[Piece]) -> Self {
        let mut slots = IndexMap::new();
        for p in pieces {
            let next = slots.len();
            slots.entry(p.unit_id).or_insert(next);
        }
        let parent = (0..slots.len()).collect();
        Self { slots, parent }
    }

    fn slot(&self, id: UnitId) -> usize {
        self.slots.get(&id).copied().unwrap_or_default()
    }

    fn id_at(&self, slot: usize) -> UnitId {
        self.slots
            .get_index(slot)
            .map(|(id, _)| *id)
            .unwrap_or(UnitId(0))
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Join the sets holding `a` and `b`. Returns `false` if they
    /// were already joined.
    fn union(&mut self, a: UnitId, b: UnitId) -> bool {
        let ra = self.find(self.slot(a));
        let rb = self.find(self.slot(b));
        if ra == rb {
            return false;
        }
        if self.id_at(ra) < self.id_at(rb) {
            self.parent[rb] = ra;
        } else {
            self.parent[ra] = rb;
        }
        true
    }

    fn root_id(&mut self, id: UnitId) -> UnitId {
        let root = self.find(self.slot(id));
        self.id_at(root)
    }
}
