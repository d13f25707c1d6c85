//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](WorldConfig::validate)
//! checks it at load time; once a simulation exists nothing can fail.

use std::error::Error;
use std::fmt;

use gol_core::{Pos, Rule};
use gol_grid::{BoundedGrid, EdgeBehavior, GridError, LifeGrid, SparseGrid};

/// Default number of recent generations remembered for cycle detection.
pub const DEFAULT_CYCLE_HISTORY: usize = 16;

/// Largest accepted `cycle_history`.
pub const MAX_CYCLE_HISTORY: usize = 4096;

// ── Topology ───────────────────────────────────────────────────────

/// The shape of the plane a simulation runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Infinite plane backed by a [`SparseGrid`].
    #[default]
    Unbounded,
    /// Finite rectangle backed by a [`BoundedGrid`].
    Bounded {
        /// Number of columns.
        width: u32,
        /// Number of rows.
        height: u32,
        /// What happens past the border.
        edge: EdgeBehavior,
    },
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid could not be built (bad dimensions or a cell outside it).
    Grid(GridError),
    /// `cycle_history` exceeds [`MAX_CYCLE_HISTORY`].
    HistoryTooLarge {
        /// The configured depth.
        configured: usize,
        /// The largest accepted depth.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::HistoryTooLarge { configured, max } => {
                write!(f, "cycle_history {configured} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::HistoryTooLarge { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Everything needed to start a simulation.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Plane shape.
    pub topology: Topology,
    /// Birth/survival rule. Default: [`Rule::CONWAY`].
    pub rule: Rule,
    /// Live cells of generation 0. Duplicates collapse.
    pub initial: Vec<Pos>,
    /// Recent generations remembered for cycle detection; 0 disables it.
    /// Default: [`DEFAULT_CYCLE_HISTORY`].
    pub cycle_history: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            topology: Topology::default(),
            rule: Rule::CONWAY,
            initial: Vec::new(),
            cycle_history: DEFAULT_CYCLE_HISTORY,
        }
    }
}

impl WorldConfig {
    /// Check every invariant without keeping the built grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_grid().map(|_| ())
    }

    /// Validate and build the generation-0 grid.
    ///
    /// # Errors
    ///
    /// [`ConfigError::HistoryTooLarge`] for an oversized history, and
    /// [`ConfigError::Grid`] for bad bounded dimensions or an initial
    /// cell outside a bounded grid.
    pub fn build_grid(&self) -> Result<LifeGrid, ConfigError> {
        if self.cycle_history > MAX_CYCLE_HISTORY {
            return Err(ConfigError::HistoryTooLarge {
                configured: self.cycle_history,
                max: MAX_CYCLE_HISTORY,
            });
        }
        let grid = match self.topology {
            Topology::Unbounded => {
                LifeGrid::Unbounded(SparseGrid::from_cells(self.initial.iter().copied()))
            }
            Topology::Bounded {
                width,
                height,
                edge,
            } => LifeGrid::Bounded(BoundedGrid::with_cells(
                width,
                height,
                edge,
                self.initial.iter().copied(),
            )?),
        };
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_grid::Grid;

    #[test]
    fn default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rule, Rule::CONWAY);
        assert_eq!(config.cycle_history, DEFAULT_CYCLE_HISTORY);
    }

    #[test]
    fn unbounded_accepts_any_cell() {
        let config = WorldConfig {
            initial: vec![Pos::new(i32::MIN, i32::MAX), Pos::new(-1, -1)],
            ..Default::default()
        };
        let grid = config.build_grid().unwrap();
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn bounded_rejects_outside_cell() {
        let config = WorldConfig {
            topology: Topology::Bounded {
                width: 4,
                height: 4,
                edge: EdgeBehavior::Absorb,
            },
            initial: vec![Pos::new(1, 1), Pos::new(4, 0)],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Grid(GridError::CellOutOfBounds { .. })
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn bounded_rejects_empty_dimensions() {
        let config = WorldConfig {
            topology: Topology::Bounded {
                width: 0,
                height: 4,
                edge: EdgeBehavior::Wrap,
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Grid(GridError::EmptyGrid))
        );
    }

    #[test]
    fn bounded_rejects_oversized_area() {
        let side = i32::MAX as u32;
        let config = WorldConfig {
            topology: Topology::Bounded {
                width: side,
                height: side,
                edge: EdgeBehavior::Absorb,
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Grid(GridError::TooManyCells { width, height, .. })
                if width == side && height == side
        ));
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn oversized_history_rejected() {
        let config = WorldConfig {
            cycle_history: MAX_CYCLE_HISTORY + 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::HistoryTooLarge {
                configured: MAX_CYCLE_HISTORY + 1,
                max: MAX_CYCLE_HISTORY
            })
        );
    }

    #[test]
    fn display_mentions_cause() {
        let err = ConfigError::from(GridError::EmptyGrid);
        assert_eq!(err.to_string(), "grid: grid must have at least one cell");
    }
}
