//! Detection of repeating generations.

use gol_core::{Generation, Pos};
use indexmap::IndexMap;

/// A repeat of an earlier configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Most recent earlier generation with the same live cells.
    pub first_seen: Generation,
    /// Generations between the two occurrences; 1 is a still life.
    pub period: u64,
}

/// Remembers the most recent generations, keyed by fingerprint.
///
/// Keeps at most `depth` entries, evicting the oldest. A depth of 0
/// disables detection. Each entry keeps the generation's live cells, so a
/// fingerprint collision between different cell sets is never reported
/// as a cycle.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    depth: usize,
    seen: IndexMap<u64, (Generation, Vec<Pos>)>,
}

impl CycleDetector {
    /// A detector remembering `depth` generations.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            seen: IndexMap::with_capacity(depth),
        }
    }

    /// How many generations are remembered.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Record `generation`'s canonical live cells under `fingerprint` and
    /// report a repeat, if any.
    ///
    /// A remembered entry with the same fingerprint but different cells is
    /// replaced without reporting.
    pub fn observe(
        &mut self,
        fingerprint: u64,
        cells: Vec<Pos>,
        generation: Generation,
    ) -> Option<Cycle> {
        if self.depth == 0 {
            return None;
        }
        let cycle = self
            .seen
            .shift_remove(&fingerprint)
            .filter(|(_, seen)| *seen == cells)
            .map(|(first_seen, _)| Cycle {
                first_seen,
                period: generation.0.saturating_sub(first_seen.0),
            });
        self.seen.insert(fingerprint, (generation, cells));
        if self.seen.len() > self.depth {
            self.seen.shift_remove_index(0);
        }
        cycle
    }

    /// Forget every fingerprint.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
