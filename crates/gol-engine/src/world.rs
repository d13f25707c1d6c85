//! Lockstep simulation runner.
//!
//! [`Simulation`] owns the current generation and advances it one
//! [`step()`](Simulation::step) at a time. Each step computes a fresh
//! grid from an immutable view of the previous one, then replaces it; the
//! [`StepResult`] it returns borrows the new grid, so the caller cannot
//! step again while holding a reference to it.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`]. All advancing methods take `&mut self`.
//! No background threads are involved.

use std::time::Instant;

use gol_core::Generation;
use gol_grid::{Grid, LifeGrid};

use crate::config::{ConfigError, WorldConfig, DEFAULT_CYCLE_HISTORY, MAX_CYCLE_HISTORY};
use crate::hash::cells_hash;
use crate::history::{Cycle, CycleDetector};
use crate::metrics::StepMetrics;
use crate::step::StepEngine;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of one [`Simulation::step()`] call.
#[derive(Debug)]
pub struct StepResult<'s, G> {
    /// The new generation's grid.
    pub grid: &'s G,
    /// The new generation's number.
    pub generation: Generation,
    /// Metrics for this step.
    pub metrics: StepMetrics,
    /// Set when this generation repeats a remembered one.
    pub cycle: Option<Cycle>,
}

// ── RunSummary ──────────────────────────────────────────────────

/// Aggregate outcome of [`Simulation::run()`] or
/// [`Simulation::run_until_cycle()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps actually taken.
    pub generations_run: u64,
    /// Generation reached.
    pub final_generation: Generation,
    /// Live cells at the end.
    pub population: usize,
    /// Births over all steps.
    pub births: u64,
    /// Deaths over all steps.
    pub deaths: u64,
    /// Wall-clock time over all steps, in microseconds.
    pub total_us: u64,
    /// First repeat detected during the run, if any.
    pub cycle: Option<Cycle>,
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded Game of Life runner.
///
/// Created from a [`WorldConfig`] via [`new()`](Simulation::new), or
/// around any [`Grid`] via [`from_grid()`](Simulation::from_grid).
///
/// # Example
///
/// ```
/// use gol_core::Pos;
/// use gol_engine::{Simulation, WorldConfig};
/// use gol_grid::Grid;
///
/// let config = WorldConfig {
///     initial: vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)],
///     ..Default::default()
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// let result = sim.step();
/// assert_eq!(result.grid.population(), 4);
/// assert_eq!(result.cycle.map(|c| c.period), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<G: Grid = LifeGrid> {
    engine: StepEngine,
    initial: G,
    grid: G,
    generation: Generation,
    history: CycleDetector,
    last_metrics: StepMetrics,
}

impl Simulation<LifeGrid> {
    /// Create a simulation from a [`WorldConfig`].
    ///
    /// Validates the configuration and builds generation 0.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        Ok(Self::from_grid(grid, StepEngine::new(config.rule))
            .with_cycle_history(config.cycle_history))
    }
}

impl<G: Grid> Simulation<G> {
    /// Create a simulation starting from `grid` as generation 0.
    ///
    /// Remembers [`DEFAULT_CYCLE_HISTORY`] generations for cycle detection.
    pub fn from_grid(grid: G, engine: StepEngine) -> Self {
        let mut sim = Self {
            engine,
            initial: grid.clone(),
            grid,
            generation: Generation::ZERO,
            history: CycleDetector::new(DEFAULT_CYCLE_HISTORY),
            last_metrics: StepMetrics::default(),
        };
        sim.reset();
        sim
    }

    /// Change the cycle-detection depth, clamped to [`MAX_CYCLE_HISTORY`].
    ///
    /// History restarts from the current generation.
    pub fn with_cycle_history(mut self, depth: usize) -> Self {
        self.history = CycleDetector::new(depth.min(MAX_CYCLE_HISTORY));
        self.remember();
        self
    }

    /// Advance one generation.
    ///
    /// Computes the next grid from the current one, replaces it, and
    /// returns a [`StepResult`] borrowing the new grid.
    pub fn step(&mut self) -> StepResult<'_, G> {
        let start = Instant::now();
        let advance = self.engine.advance(&self.grid);
        self.grid = advance.grid;
        self.generation = self.generation.next();
        let cycle = self.remember();

        self.last_metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            births: advance.births,
            deaths: advance.deaths,
            population: self.grid.population(),
            cells_evaluated: advance.cells_evaluated,
        };

        StepResult {
            grid: &self.grid,
            generation: self.generation,
            metrics: self.last_metrics.clone(),
            cycle,
        }
    }

    /// Advance `generations` steps, recording the first cycle seen.
    pub fn run(&mut self, generations: u64) -> RunSummary {
        self.run_inner(generations, false)
    }

    /// Advance up to `max_generations` steps, stopping at the first cycle.
    pub fn run_until_cycle(&mut self, max_generations: u64) -> RunSummary {
        self.run_inner(max_generations, true)
    }

    fn run_inner(&mut self, generations: u64, stop_on_cycle: bool) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..generations {
            let result = self.step();
            summary.generations_run += 1;
            summary.births += result.metrics.births as u64;
            summary.deaths += result.metrics.deaths as u64;
            summary.total_us += result.metrics.total_us;
            if summary.cycle.is_none() {
                summary.cycle = result.cycle;
            }
            if stop_on_cycle && result.cycle.is_some() {
                break;
            }
        }
        summary.final_generation = self.generation;
        summary.population = self.grid.population();
        summary
    }

    /// Return to generation 0 with the initial grid.
    pub fn reset(&mut self) {
        self.grid = self.initial.clone();
        self.generation = Generation::ZERO;
        self.last_metrics = StepMetrics::default();
        self.history.clear();
        self.remember();
    }

    /// Feed the current generation to the cycle detector.
    fn remember(&mut self) -> Option<Cycle> {
        if self.history.depth() == 0 {
            return None;
        }
        let cells = self.grid.live_cells();
        self.history
            .observe(cells_hash(&cells), cells, self.generation)
    }

    /// The current grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// The generation-0 grid.
    pub fn initial(&self) -> &G {
        &self.initial
    }

    /// The current generation number.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The transition function in use.
    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    /// Metrics from the most recent step; zeroed before the first.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}
