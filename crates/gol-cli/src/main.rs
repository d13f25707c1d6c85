//! `gol` — Run Conway's Game of Life from the command line.
//!
//! **Usage:**
//! ```text
//! gol --cells "1,0 2,1 0,2 1,2 2,2" --generations 4
//! gol --random --width 40 --height 20 --wrap --generations 100 --stop-on-cycle
//! ```
//!
//! Prints each generation as text (`O` live, `.` dead), or only the final
//! live cells with `--output cells`. Exits non-zero on malformed input.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]

mod args;
mod output;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use gol_engine::Simulation;

use crate::args::Args;
use crate::output::Report;

fn main() -> Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(&args, &mut stdout.lock(), &mut stderr.lock())
}

/// Build the simulation described by `args` and drive it, writing the
/// requested output to `out` and diagnostics to `err`.
fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let config = args.world_config()?;
    let mut sim = Simulation::new(config).context("invalid world configuration")?;
    let mut report = Report::new(args.output, out);

    report.generation(sim.generation(), sim.grid())?;
    for _ in 0..args.generations {
        let result = sim.step();
        if args.stats {
            output::write_stats(err, result.generation, &result.metrics)?;
        }
        report.generation(result.generation, result.grid)?;
        if let Some(cycle) = result.cycle.filter(|_| args.stop_on_cycle) {
            output::write_cycle(err, result.generation, &cycle)?;
            break;
        }
    }
    report.finish(sim.grid())?;
    Ok(())
}
