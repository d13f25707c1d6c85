//! Test utilities and pattern fixtures for gol development.
//!
//! Provides the classic named patterns ([`patterns`]) and small helpers
//! for building grids from them and comparing cell sets.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

use gol_core::Pos;
use gol_grid::{BoundedGrid, EdgeBehavior, Grid, SparseGrid};

pub use patterns::Pattern;

/// Positions from `(x, y)` pairs.
pub fn cells(pairs: &[(i32, i32)]) -> Vec<Pos> {
    pairs.iter().copied().map(Pos::from).collect()
}

/// Sparse grid from `(x, y)` pairs.
pub fn sparse(pairs: &[(i32, i32)]) -> SparseGrid {
    SparseGrid::from_cells(cells(pairs))
}

/// Bounded grid from `(x, y)` pairs. Panics if a cell is outside.
pub fn bounded(width: u32, height: u32, edge: EdgeBehavior, pairs: &[(i32, i32)]) -> BoundedGrid {
    BoundedGrid::with_cells(width, height, edge, cells(pairs))
        .unwrap_or_else(|e| panic!("fixture does not fit {width}x{height}: {e}"))
}

/// Shift every position by `(dx, dy)` and return them in canonical order.
pub fn translated(positions: &[Pos], dx: i32, dy: i32) -> Vec<Pos> {
    let mut out: Vec<Pos> = positions
        .iter()
        .map(|p| Pos::new(p.x + dx, p.y + dy))
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Canonical (sorted, deduplicated) copy of a position list.
pub fn canonical(positions: &[Pos]) -> Vec<Pos> {
    translated(positions, 0, 0)
}

/// Live cells of `grid` shifted so the bounding box starts at the origin.
///
/// Two grids holding the same shape anywhere on the plane normalise to
/// the same list.
pub fn normalised<G: Grid>(grid: &G) -> Vec<Pos> {
    match grid.bounds() {
        None => Vec::new(),
        Some(b) => translated(&grid.live_cells(), -b.min.x, -b.min.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_is_canonical() {
        let t = translated(&cells(&[(2, 2), (0, 0), (0, 0)]), 1, -1);
        assert_eq!(t, cells(&[(1, -1), (3, 1)]));
    }

    #[test]
    fn normalised_ignores_position() {
        let a = sparse(&[(10, 10), (11, 10)]);
        let b = sparse(&[(-5, 3), (-4, 3)]);
        assert_eq!(normalised(&a), normalised(&b));
        assert_eq!(normalised(&a), cells(&[(0, 0), (1, 0)]));
    }
}
