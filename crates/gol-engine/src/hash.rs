//! Fingerprints of grid generations.
//!
//! Uses FNV-1a for fast, deterministic hashing of the live-cell set.
//! These hashes are not cryptographically secure; they are used for
//! fast repeat detection between generations.

use gol_core::Pos;
use gol_grid::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the live-cell set of a grid.
///
/// Folds in the population, then every live position in canonical
/// order, so equal cell sets hash equally regardless of how the grid
/// was built. Topology is not included.
pub fn grid_hash<G: Grid>(grid: &G) -> u64 {
    cells_hash(&grid.live_cells())
}

/// Hash a canonical live-cell list, as returned by [`Grid::live_cells`].
pub fn cells_hash(cells: &[Pos]) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, cells.len() as u64);
    for pos in cells {
        hash = fnv1a_u32(hash, pos.x as u32);
        hash = fnv1a_u32(hash, pos.y as u32);
    }
    hash
}
