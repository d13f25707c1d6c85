//! Runtime choice between the two grid backends.

use crate::bounded::BoundedGrid;
use crate::bounds::Bounds;
use crate::grid::Grid;
use crate::sparse::SparseGrid;
use gol_core::Pos;
use indexmap::IndexSet;
use smallvec::SmallVec;

/// Either an unbounded [`SparseGrid`] or a finite [`BoundedGrid`].
///
/// Lets a simulation pick its topology from configuration while the step
/// engine stays generic over [`Grid`]. Every method delegates to the
/// wrapped backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifeGrid {
    /// Infinite plane.
    Unbounded(SparseGrid),
    /// Finite rectangle.
    Bounded(BoundedGrid),
}

impl LifeGrid {
    /// The wrapped sparse grid, if unbounded.
    pub fn as_sparse(&self) -> Option<&SparseGrid> {
        match self {
            Self::Unbounded(g) => Some(g),
            Self::Bounded(_) => None,
        }
    }

    /// The wrapped bounded grid, if finite.
    pub fn as_bounded(&self) -> Option<&BoundedGrid> {
        match self {
            Self::Unbounded(_) => None,
            Self::Bounded(g) => Some(g),
        }
    }
}

impl Default for LifeGrid {
    fn default() -> Self {
        Self::Unbounded(SparseGrid::new())
    }
}

impl From<SparseGrid> for LifeGrid {
    fn from(g: SparseGrid) -> Self {
        Self::Unbounded(g)
    }
}

impl From<BoundedGrid> for LifeGrid {
    fn from(g: BoundedGrid) -> Self {
        Self::Bounded(g)
    }
}

impl Grid for LifeGrid {
    fn is_alive(&self, pos: Pos) -> bool {
        match self {
            Self::Unbounded(g) => g.is_alive(pos),
            Self::Bounded(g) => g.is_alive(pos),
        }
    }

    fn neighbours(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        match self {
            Self::Unbounded(g) => g.neighbours(pos),
            Self::Bounded(g) => g.neighbours(pos),
        }
    }

    fn live_neighbours(&self, pos: Pos) -> u8 {
        match self {
            Self::Unbounded(g) => g.live_neighbours(pos),
            Self::Bounded(g) => g.live_neighbours(pos),
        }
    }

    fn population(&self) -> usize {
        match self {
            Self::Unbounded(g) => g.population(),
            Self::Bounded(g) => g.population(),
        }
    }

    fn live_cells(&self) -> Vec<Pos> {
        match self {
            Self::Unbounded(g) => g.live_cells(),
            Self::Bounded(g) => g.live_cells(),
        }
    }

    fn extent(&self) -> Option<Bounds> {
        match self {
            Self::Unbounded(g) => g.extent(),
            Self::Bounded(g) => g.extent(),
        }
    }

    fn candidates(&self) -> IndexSet<Pos> {
        match self {
            Self::Unbounded(g) => g.candidates(),
            Self::Bounded(g) => g.candidates(),
        }
    }

    fn with_live_cells(&self, cells: Vec<Pos>) -> Self {
        match self {
            Self::Unbounded(g) => Self::Unbounded(g.with_live_cells(cells)),
            Self::Bounded(g) => Self::Bounded(g.with_live_cells(cells)),
        }
    }
}
