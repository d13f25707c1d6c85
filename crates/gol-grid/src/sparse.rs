//! Unbounded grid storing only live cells.

use crate::grid::Grid;
use gol_core::Pos;
use indexmap::IndexSet;
use smallvec::SmallVec;

/// A conceptually infinite grid.
///
/// Only live cells are stored, in an insertion-ordered set so iteration
/// is deterministic. Every position not in the set is dead; there is no
/// edge, except that neighbours beyond `i32` range do not exist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    live: IndexSet<Pos>,
}

impl SparseGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid whose live cells are `cells`. Duplicates collapse.
    pub fn from_cells(cells: impl IntoIterator<Item = Pos>) -> Self {
        Self {
            live: cells.into_iter().collect(),
        }
    }

    /// Set the state of one cell.
    pub fn set(&mut self, pos: Pos, alive: bool) {
        if alive {
            self.live.insert(pos);
        } else {
            self.live.shift_remove(&pos);
        }
    }

    /// Invert the state of one cell, returning its new state.
    pub fn toggle(&mut self, pos: Pos) -> bool {
        if self.live.shift_remove(&pos) {
            false
        } else {
            self.live.insert(pos);
            true
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

impl FromIterator<Pos> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl Grid for SparseGrid {
    fn is_alive(&self, pos: Pos) -> bool {
        self.live.contains(&pos)
    }

    fn neighbours(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        pos.moore().collect()
    }

    fn population(&self) -> usize {
        self.live.len()
    }

    fn live_cells(&self) -> Vec<Pos> {
        let mut cells: Vec<Pos> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    fn with_live_cells(&self, cells: Vec<Pos>) -> Self {
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn grid(cells: &[(i32, i32)]) -> SparseGrid {
        cells.iter().copied().map(Pos::from).collect()
    }

    #[test]
    fn unpopulated_cells_are_dead() {
        let g = grid(&[(0, 0)]);
        assert!(g.is_alive(Pos::new(0, 0)));
        assert!(!g.is_alive(Pos::new(1, 0)));
        assert!(!g.is_alive(Pos::new(i32::MIN, i32::MAX)));
    }

    #[test]
    fn duplicates_collapse() {
        let g = grid(&[(1, 1), (1, 1), (2, 2)]);
        assert_eq!(g.population(), 2);
    }

    #[test]
    fn live_neighbours_counts_moore_ring() {
        // Full 3x3 block: centre sees 8, corner sees 3.
        let cells: Vec<(i32, i32)> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        let g = grid(&cells);
        assert_eq!(g.live_neighbours(Pos::new(1, 1)), 8);
        assert_eq!(g.live_neighbours(Pos::new(0, 0)), 3);
        assert_eq!(g.live_neighbours(Pos::new(3, 1)), 3);
        assert_eq!(g.live_neighbours(Pos::new(10, 10)), 0);
    }

    #[test]
    fn live_neighbours_excludes_self() {
        let g = grid(&[(5, 5)]);
        assert_eq!(g.live_neighbours(Pos::new(5, 5)), 0);
        assert_eq!(g.live_neighbours(Pos::new(4, 4)), 1);
    }

    #[test]
    fn edge_of_i32_range_counts_as_dead() {
        let corner = Pos::new(i32::MAX, i32::MAX);
        let g = grid(&[(i32::MAX - 1, i32::MAX), (i32::MAX, i32::MAX - 1)]);
        assert_eq!(g.neighbours(corner).len(), 3);
        assert_eq!(g.live_neighbours(corner), 2);
    }

    #[test]
    fn set_toggle_clear() {
        let mut g = SparseGrid::new();
        let p = Pos::new(-7, 3);
        assert!(g.toggle(p));
        assert!(g.is_alive(p));
        assert!(!g.toggle(p));
        assert!(g.is_empty());
        g.set(p, true);
        g.set(p, true);
        assert_eq!(g.population(), 1);
        g.set(p, false);
        assert!(g.is_empty());
        g.set(Pos::ORIGIN, true);
        g.clear();
        assert!(g.is_empty());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        assert_eq!(grid(&[(0, 0), (1, 1)]), grid(&[(1, 1), (0, 0)]));
    }

    #[test]
    fn candidates_cover_live_cells_and_neighbours() {
        let g = grid(&[(0, 0)]);
        let c = g.candidates();
        assert_eq!(c.len(), 9);
        assert!(c.contains(&Pos::new(0, 0)));
        assert!(c.contains(&Pos::new(-1, 1)));
    }

    #[test]
    fn compliance_suite() {
        let g = grid(&[(0, 0), (1, 0), (2, 0), (5, 5), (-3, 2)]);
        compliance::run_full_compliance(&g);
    }

    proptest! {
        #[test]
        fn live_cells_sorted_and_unique(
            cells in prop::collection::vec((-20i32..20, -20i32..20), 0..64)
        ) {
            let g = grid(&cells);
            let live = g.live_cells();
            prop_assert!(live.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(live.len(), g.population());
        }
    }
}
