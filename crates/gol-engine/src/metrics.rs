//! Per-generation metrics for the simulation runner.
//!
//! [`StepMetrics`] captures timing and population data for a single
//! generation, for telemetry and the command-line `--stats` output.

/// Timing and population metrics collected during a single step.
///
/// The runner populates these fields after each `step()` call;
/// consumers read them from the most recent step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Cells that came alive this step.
    pub births: usize,
    /// Cells that died this step.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
    /// Cells whose neighbourhood was inspected.
    pub cells_evaluated: usize,
}
