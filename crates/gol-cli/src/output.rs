//! Writing generations, metrics, and cycle reports.

use std::io::{self, Write};

use gol_core::Generation;
use gol_engine::{Cycle, StepMetrics};
use gol_grid::text::try_render_grid;
use gol_grid::Grid;

use crate::args::OutputMode;

/// Writes generations to stdout in the selected [`OutputMode`].
pub struct Report<'w, W> {
    mode: OutputMode,
    out: &'w mut W,
    written: usize,
}

impl<'w, W: Write> Report<'w, W> {
    /// A report writing to `out`.
    pub fn new(mode: OutputMode, out: &'w mut W) -> Self {
        Self {
            mode,
            out,
            written: 0,
        }
    }

    /// Record one generation. Grid mode prints it; cells mode waits for
    /// [`finish`](Self::finish).
    pub fn generation<G: Grid>(&mut self, generation: Generation, grid: &G) -> io::Result<()> {
        if self.mode != OutputMode::Grid {
            return Ok(());
        }
        if self.written > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "Generation {generation}:")?;
        match try_render_grid(grid) {
            Some(text) if text.is_empty() => writeln!(self.out, "(empty)")?,
            Some(text) => self.out.write_all(text.as_bytes())?,
            None => {
                writeln!(self.out, "(too large to draw; live cells:)")?;
                for pos in grid.live_cells() {
                    writeln!(self.out, "{pos}")?;
                }
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Write whatever is left once the run is over.
    pub fn finish<G: Grid>(self, grid: &G) -> io::Result<()> {
        if self.mode == OutputMode::Cells {
            for pos in grid.live_cells() {
                writeln!(self.out, "{pos}")?;
            }
        }
        self.out.flush()
    }
}

/// One `--stats` line.
pub fn write_stats(err: &mut impl Write, generation: Generation, m: &StepMetrics) -> io::Result<()> {
    writeln!(
        err,
        "generation {generation}: population={} births={} deaths={} evaluated={} time={}us",
        m.population, m.births, m.deaths, m.cells_evaluated, m.total_us
    )
}

/// Announce a detected cycle.
pub fn write_cycle(err: &mut impl Write, generation: Generation, cycle: &Cycle) -> io::Result<()> {
    writeln!(
        err,
        "cycle detected at generation {generation}: repeats generation {} (period {})",
        cycle.first_seen, cycle.period
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_core::Pos;
    use gol_grid::SparseGrid;

    #[test]
    fn cells_mode_skips_generations() {
        let mut buf = Vec::new();
        let g = SparseGrid::from_cells([Pos::new(-1, 2), Pos::new(4, 0)]);
        let mut report = Report::new(OutputMode::Cells, &mut buf);
        report.generation(Generation(0), &g).unwrap();
        report.finish(&g).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4,0\n-1,2\n");
    }

    #[test]
    fn oversized_grid_falls_back_to_cell_list() {
        let mut buf = Vec::new();
        let g = SparseGrid::from_cells([Pos::new(0, 0), Pos::new(100_000, 100_000)]);
        let mut report = Report::new(OutputMode::Grid, &mut buf);
        report.generation(Generation(0), &g).unwrap();
        report.finish(&g).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Generation 0:\n(too large to draw; live cells:)\n0,0\n100000,100000\n"
        );
    }

    #[test]
    fn stats_line_format() {
        let mut buf = Vec::new();
        let m = StepMetrics {
            total_us: 12,
            births: 1,
            deaths: 2,
            population: 3,
            cells_evaluated: 40,
        };
        write_stats(&mut buf, Generation(5), &m).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "generation 5: population=3 births=1 deaths=2 evaluated=40 time=12us\n"
        );
    }
}
