//! State fingerprints.
//!
//! Uses FNV-1a for fast, deterministic hashing of puzzle state. Every
//! move carries the hash of the state it committed, so a recorded
//! session can be checked move by move. These hashes are not
//! cryptographically secure.

use crate::state::GridState;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the grid dimensions, every piece's position and unit id (in
/// piece-id order), and the solved flag.
pub fn state_hash(state: &GridState) -> u64 {
    let grid = state.grid();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, grid.rows());
    hash = fnv1a_u32(hash, grid.cols());
    for p in state.pieces() {
        hash = fnv1a_u64(hash, p.current_pos as u64);
        hash = fnv1a_u64(hash, p.unit_id.0);
    }
    fnv1a_byte(hash, u8::from(state.is_solved()))
}

/// Hash a bare piece layout (entry `i` is the cell holding piece `i`).
pub fn layout_hash(layout: &[usize]) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, layout.len() as u64);
    for &pos in layout {
        hash = fnv1a_u64(hash, pos as u64);
    }
    hash
}
