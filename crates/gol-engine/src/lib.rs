//! Step engine and simulation runner for Game of Life grids.
//!
//! [`StepEngine`] is the pure transition function: it reads one
//! generation and produces the next as a new grid, never touching its
//! input. [`Simulation`] wraps it in a lockstep runner that owns the
//! current grid, counts generations, collects [`StepMetrics`], and
//! detects repeating configurations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod history;
pub mod metrics;
pub mod step;
pub mod world;

pub use config::{ConfigError, Topology, WorldConfig, DEFAULT_CYCLE_HISTORY, MAX_CYCLE_HISTORY};
pub use hash::{cells_hash, grid_hash};
pub use history::{Cycle, CycleDetector};
pub use metrics::StepMetrics;
pub use step::{Advance, StepEngine};
pub use world::{RunSummary, Simulation, StepResult};
