//! The generation transition function.

use gol_core::Rule;
use gol_grid::Grid;

/// Computes the next generation of a grid.
///
/// Every cell's next state depends only on the *current* generation:
/// the engine reads the input grid through [`Grid::is_alive`] and
/// [`Grid::live_neighbours`] and writes into a fresh grid built with
/// [`Grid::with_live_cells`], so all cells update simultaneously and the
/// input is left untouched.
///
/// The default engine runs [`Rule::CONWAY`].
///
/// # Examples
///
/// ```
/// use gol_core::Pos;
/// use gol_engine::StepEngine;
/// use gol_grid::{Grid, SparseGrid};
///
/// let blinker = SparseGrid::from_cells([Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)]);
/// let next = StepEngine::default().step(&blinker);
/// assert_eq!(next.live_cells(), vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);
/// assert_eq!(blinker.population(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEngine {
    rule: Rule,
}

/// Outcome of one transition: the new grid and what changed.
#[derive(Clone, Debug)]
pub struct Advance<G> {
    /// The next generation.
    pub grid: G,
    /// Cells that were dead and are now alive.
    pub births: usize,
    /// Cells that were alive and are now dead.
    pub deaths: usize,
    /// Cells whose neighbourhood was inspected.
    pub cells_evaluated: usize,
}

impl StepEngine {
    /// An engine applying `rule`.
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// The rule this engine applies.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The next generation of `grid`.
    pub fn step<G: Grid>(&self, grid: &G) -> G {
        self.advance(grid).grid
    }

    /// The grid after `generations` steps. Zero steps returns a copy.
    pub fn step_n<G: Grid>(&self, grid: &G, generations: u64) -> G {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }

    /// The next generation of `grid` plus birth/death counts.
    ///
    /// Only [`Grid::candidates`] are evaluated; every other cell is dead
    /// with no live neighbour and stays dead.
    pub fn advance<G: Grid>(&self, grid: &G) -> Advance<G> {
        let candidates = grid.candidates();
        let mut next = Vec::with_capacity(grid.population());
        let mut births = 0;
        let mut deaths = 0;

        for &pos in &candidates {
            let alive = grid.is_alive(pos);
            let next_alive = self.rule.next_state(alive, grid.live_neighbours(pos));
            match (alive, next_alive) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
            if next_alive {
                next.push(pos);
            }
        }

        Advance {
            grid: grid.with_live_cells(next),
            births,
            deaths,
            cells_evaluated: candidates.len(),
        }
    }
}
