//! Command-line arguments and their translation into a [`WorldConfig`].

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gol_core::{parse_cells, Rule};
use gol_engine::{Topology, WorldConfig};
use gol_grid::{random_cells, EdgeBehavior, DEFAULT_DENSITY};

/// How generations are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Every generation as a text grid, headed `Generation N:`.
    #[default]
    Grid,
    /// Only the final live cells, one `x,y` per line.
    Cells,
}

/// Run Conway's Game of Life.
#[derive(Debug, Parser)]
#[command(name = "gol", version, about = "Run Conway's Game of Life")]
pub struct Args {
    /// Initial live cells: `x,y` pairs separated by spaces or `;`,
    /// optionally parenthesised.
    #[arg(long, conflicts_with = "random")]
    pub cells: Option<String>,

    /// Start from a random soup filling the bounded grid.
    #[arg(long, requires_all = ["width", "height"])]
    pub random: bool,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 0, requires = "random")]
    pub seed: u64,

    /// Fraction of live cells for `--random`.
    #[arg(long, default_value_t = DEFAULT_DENSITY, requires = "random")]
    pub density: f64,

    /// Number of generations to compute.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub generations: u64,

    /// Width of a bounded grid (unbounded when omitted).
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Height of a bounded grid.
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Wrap a bounded grid's edges into a torus.
    #[arg(long, requires = "width")]
    pub wrap: bool,

    /// Birth/survival rule in `B/S` notation.
    #[arg(long, default_value_t = Rule::CONWAY)]
    pub rule: Rule,

    /// What to print on stdout.
    #[arg(long, value_enum, default_value_t = OutputMode::Grid)]
    pub output: OutputMode,

    /// Print per-generation metrics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Stop as soon as a generation repeats a recent one.
    #[arg(long)]
    pub stop_on_cycle: bool,
}

impl Args {
    /// The plane described by `--width`, `--height`, and `--wrap`.
    pub fn topology(&self) -> Topology {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Topology::Bounded {
                width,
                height,
                edge: if self.wrap {
                    EdgeBehavior::Wrap
                } else {
                    EdgeBehavior::Absorb
                },
            },
            _ => Topology::Unbounded,
        }
    }

    /// Parse the initial cells and assemble a [`WorldConfig`].
    pub fn world_config(&self) -> Result<WorldConfig> {
        let initial = match self.topology() {
            Topology::Bounded { width, height, .. } if self.random => {
                random_cells(width, height, self.density, self.seed)
                    .context("cannot generate random soup")?
            }
            _ => parse_cells(self.cells.as_deref().unwrap_or_default())
                .context("cannot parse --cells")?,
        };
        Ok(WorldConfig {
            topology: self.topology(),
            rule: self.rule,
            initial,
            ..Default::default()
        })
    }
}
