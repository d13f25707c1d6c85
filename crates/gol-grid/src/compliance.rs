//! Grid trait compliance test helpers.
//!
//! These functions verify that a Grid implementation satisfies the
//! invariants required by the trait contract. Reused across the backend
//! test modules (SparseGrid, BoundedGrid).

use crate::grid::Grid;
use gol_core::Pos;
use indexmap::IndexSet;

/// Positions worth probing: live cells, their neighbours, and a ring
/// just outside the live bounding box.
fn probe_positions(grid: &impl Grid) -> Vec<Pos> {
    let mut probes: IndexSet<Pos> = grid.candidates();
    if let Some(b) = grid.extent() {
        for y in b.min.y.saturating_sub(1)..=b.max.y.saturating_add(1) {
            for x in b.min.x.saturating_sub(1)..=b.max.x.saturating_add(1) {
                probes.insert(Pos::new(x, y));
            }
        }
    }
    probes.into_iter().collect()
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)` for cells inside the grid.
pub fn assert_neighbours_symmetric(grid: &impl Grid) {
    for pos in grid.candidates() {
        for nb in grid.neighbours(pos) {
            assert!(
                grid.neighbours(nb).contains(&pos),
                "neighbour symmetry violated: {nb:?} in N({pos:?}) but {pos:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that no position is its own neighbour on grids at least 3 wide.
pub fn assert_neighbours_exclude_self(grid: &impl Grid) {
    for pos in probe_positions(grid) {
        assert!(
            !grid.neighbours(pos).contains(&pos),
            "{pos:?} listed as its own neighbour"
        );
    }
}

/// Assert that `live_neighbours` equals the number of live entries in `neighbours`.
pub fn assert_live_neighbours_consistent(grid: &impl Grid) {
    for pos in probe_positions(grid) {
        let expected = grid
            .neighbours(pos)
            .iter()
            .filter(|&&nb| grid.is_alive(nb))
            .count();
        assert_eq!(
            usize::from(grid.live_neighbours(pos)),
            expected,
            "live_neighbours({pos:?}) disagrees with neighbours()"
        );
        assert!(grid.live_neighbours(pos) <= 8);
    }
}

/// Assert that `live_cells` is sorted, duplicate-free, alive, and sized to `population`.
pub fn assert_live_cells_canonical(grid: &impl Grid) {
    let live = grid.live_cells();
    assert_eq!(
        live.len(),
        grid.population(),
        "live_cells length ({}) != population ({})",
        live.len(),
        grid.population()
    );
    assert!(
        live.windows(2).all(|w| w[0] < w[1]),
        "live_cells not in strict row-major order"
    );
    assert!(live.iter().all(|&p| grid.is_alive(p)));
}

/// Assert that rebuilding from `live_cells` reproduces the grid.
pub fn assert_rebuild_round_trips(grid: &impl Grid) {
    let rebuilt = grid.with_live_cells(grid.live_cells());
    assert_eq!(rebuilt.live_cells(), grid.live_cells());
    assert_eq!(rebuilt.extent(), grid.extent());
}

/// Assert that every live cell lies within `bounds`.
pub fn assert_bounds_enclose_live(grid: &impl Grid) {
    match grid.bounds() {
        None => assert!(grid.is_empty(), "bounds() is None for a non-empty grid"),
        Some(b) => assert!(grid.live_cells().into_iter().all(|p| b.contains(p))),
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &impl Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_exclude_self(grid);
    assert_live_neighbours_consistent(grid);
    assert_live_cells_canonical(grid);
    assert_rebuild_round_trips(grid);
    assert_bounds_enclose_live(grid);
}
