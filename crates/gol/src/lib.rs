//! gol: Conway's Game of Life on sparse infinite or bounded finite grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gol sub-crates. For most users, adding `gol` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gol::prelude::*;
//!
//! // A glider on the infinite plane.
//! let glider = parse_cells("1,0 2,1 0,2 1,2 2,2").unwrap();
//! let config = WorldConfig {
//!     initial: glider.clone(),
//!     ..Default::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let summary = sim.run(4);
//! assert_eq!(summary.final_generation, Generation(4));
//!
//! // Four generations later it has moved one cell down and to the right.
//! let moved: Vec<Pos> = glider.iter().map(|p| Pos::new(p.x + 1, p.y + 1)).collect();
//! let mut expected = moved;
//! expected.sort();
//! assert_eq!(sim.grid().live_cells(), expected);
//!
//! // The bare transition function works on any grid.
//! let blinker = SparseGrid::from_cells(parse_cells("0,1 1,1 2,1").unwrap());
//! let next = StepEngine::default().step(&blinker);
//! assert_eq!(gol::grid::text::render_grid(&next), "O\nO\nO\n");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gol-core` | Positions, generations, rules, input parsing |
//! | [`grid`] | `gol-grid` | The `Grid` trait, backends, text rendering, random soups |
//! | [`engine`] | `gol-engine` | Step engine, simulation runner, configuration, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gol-core`).
///
/// Contains [`types::Pos`], [`types::Generation`], [`types::Rule`], and the
/// live-cell parser [`types::parse_cells`].
pub use gol_core as types;

/// Grid backends (`gol-grid`).
///
/// Provides the [`grid::Grid`] trait and concrete backends:
/// [`grid::SparseGrid`], [`grid::BoundedGrid`], and [`grid::LifeGrid`].
pub use gol_grid as grid;

/// Step engine and simulation runner (`gol-engine`).
///
/// [`engine::StepEngine`] for the pure transition function,
/// [`engine::Simulation`] for stepping with metrics and cycle detection.
pub use gol_engine as engine;

/// Common imports for typical gol usage.
///
/// ```rust
/// use gol::prelude::*;
/// ```
///
/// This imports the most frequently used types: positions and rules, the
/// grid trait and its backends, and the engine.
pub mod prelude {
    // Core types
    pub use gol_core::{parse_cells, Generation, Pos, Rule};

    // Errors
    pub use gol_core::ParseError;
    pub use gol_engine::ConfigError;
    pub use gol_grid::GridError;

    // Grids
    pub use gol_grid::{BoundedGrid, EdgeBehavior, Grid, LifeGrid, SparseGrid};

    // Engine
    pub use gol_engine::{
        Cycle, RunSummary, Simulation, StepEngine, StepMetrics, StepResult, Topology, WorldConfig,
    };
}
