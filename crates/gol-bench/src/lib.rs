//! Benchmark profiles for the gol workspace.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 128x128 torus (16K cells) filled with a random soup
//! - [`stress_profile`]: 512x512 torus (~262K cells)
//! - [`unbounded_soup_profile`]: the reference soup on the infinite plane

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gol_engine::{Topology, WorldConfig};
use gol_grid::{random_cells, EdgeBehavior, GridError, DEFAULT_DENSITY};

/// Side of the reference grid.
pub const REFERENCE_SIDE: u32 = 128;

/// Side of the stress grid.
pub const STRESS_SIDE: u32 = 512;

/// Build a reference benchmark profile: 128x128 torus (16K cells).
///
/// Seeded soup at the default density of one live cell in three.
pub fn reference_profile(seed: u64) -> Result<WorldConfig, GridError> {
    torus_soup(REFERENCE_SIDE, seed)
}

/// Build a stress benchmark profile: 512x512 torus (~262K cells).
///
/// Same soup as [`reference_profile`] at 16x the cell count.
pub fn stress_profile(seed: u64) -> Result<WorldConfig, GridError> {
    torus_soup(STRESS_SIDE, seed)
}

/// The [`reference_profile`] soup on an unbounded sparse grid.
///
/// Exercises hash-set lookups instead of array indexing; the soup's
/// debris spreads freely past the original square.
pub fn unbounded_soup_profile(seed: u64) -> Result<WorldConfig, GridError> {
    Ok(WorldConfig {
        initial: random_cells(REFERENCE_SIDE, REFERENCE_SIDE, DEFAULT_DENSITY, seed)?,
        ..Default::default()
    })
}

fn torus_soup(side: u32, seed: u64) -> Result<WorldConfig, GridError> {
    Ok(WorldConfig {
        topology: Topology::Bounded {
            width: side,
            height: side,
            edge: EdgeBehavior::Wrap,
        },
        initial: random_cells(side, side, DEFAULT_DENSITY, seed)?,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile(42).unwrap();
        config.validate().unwrap();
        assert!(!config.initial.is_empty());
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).unwrap().validate().unwrap();
    }

    #[test]
    fn unbounded_profile_matches_reference_cells() {
        let a = reference_profile(7).unwrap();
        let b = unbounded_soup_profile(7).unwrap();
        assert_eq!(a.initial, b.initial);
        assert_eq!(b.topology, Topology::Unbounded);
    }

    #[test]
    fn profiles_deterministic() {
        assert_eq!(
            reference_profile(42).unwrap().initial,
            reference_profile(42).unwrap().initial
        );
        assert_ne!(
            reference_profile(42).unwrap().initial,
            reference_profile(43).unwrap().initial
        );
    }
}
