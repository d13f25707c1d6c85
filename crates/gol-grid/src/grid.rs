//! The core `Grid` trait.

use crate::bounds::Bounds;
use gol_core::Pos;
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;

/// Central spatial abstraction for Game of Life simulations.
///
/// The step engine only talks to grids through this trait: it reads the
/// current generation via [`is_alive`](Self::is_alive) and
/// [`live_neighbours`](Self::live_neighbours), then builds the next
/// generation with [`with_live_cells`](Self::with_live_cells). A grid is
/// never edited while a step reads it.
///
/// # Contract
///
/// - Queries are total: any `Pos` is accepted, and positions outside the
///   grid or never populated read as dead.
/// - Coordinates are unique; a position is either alive or not.
/// - [`live_cells`](Self::live_cells) is in canonical row-major order.
pub trait Grid: Clone + fmt::Debug + Send + Sync + 'static {
    /// Whether the cell at `pos` is alive.
    fn is_alive(&self, pos: Pos) -> bool;

    /// The Moore neighbourhood of `pos` under this grid's topology.
    ///
    /// Returns positions in a deterministic, backend-defined order.
    /// Neighbours that do not exist (past an absorbing edge, or beyond
    /// `i32` range) are omitted. A wrapping grid narrower than 3 cells may
    /// list the same position more than once; each occurrence counts.
    fn neighbours(&self, pos: Pos) -> SmallVec<[Pos; 8]>;

    /// Number of live cells among the 8 surrounding positions.
    fn live_neighbours(&self, pos: Pos) -> u8 {
        self.neighbours(pos)
            .into_iter()
            .filter(|&nb| self.is_alive(nb))
            .count() as u8
    }

    /// Number of live cells.
    fn population(&self) -> usize;

    /// `true` when no cell is alive.
    fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// All live cells in canonical row-major order.
    fn live_cells(&self) -> Vec<Pos>;

    /// Bounding box of the live cells, or `None` for an empty grid.
    fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.live_cells())
    }

    /// The area a text rendering of this grid covers.
    ///
    /// Defaults to the live bounding box. Finite grids override this to
    /// cover their whole area.
    fn extent(&self) -> Option<Bounds> {
        self.bounds()
    }

    /// Every cell whose state may differ in the next generation.
    ///
    /// That is each live cell plus its neighbours: a cell with no live
    /// neighbour and not itself alive stays dead under any rule without
    /// birth on zero neighbours. Iteration order is deterministic.
    fn candidates(&self) -> IndexSet<Pos> {
        let live = self.live_cells();
        let mut out = IndexSet::with_capacity(live.len() * 9);
        for cell in live {
            out.insert(cell);
            out.extend(self.neighbours(cell));
        }
        out
    }

    /// A fresh grid with this grid's topology holding exactly `cells`.
    ///
    /// Duplicates collapse. Positions the topology cannot hold (outside a
    /// finite grid) are dropped, since they are dead by definition.
    fn with_live_cells(&self, cells: Vec<Pos>) -> Self;
}
