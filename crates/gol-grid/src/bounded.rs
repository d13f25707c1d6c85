//! Finite rectangular grid with configurable edge behavior.

use crate::bounds::Bounds;
use crate::edge::EdgeBehavior;
use crate::error::GridError;
use crate::grid::Grid;
use crate::random;
use gol_core::{Pos, MOORE_OFFSETS};
use smallvec::SmallVec;

/// A finite `width x height` grid.
///
/// Cells have positions `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, stored row-major. Positions outside that rectangle
/// always read as dead. Neighbourhoods at the border are controlled by
/// [`EdgeBehavior`]:
/// - **Absorb**: border cells have fewer neighbours (corners 3, edges 5)
/// - **Wrap**: opposite borders touch (torus)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
    cells: Vec<bool>,
    population: usize,
}

impl BoundedGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum number of cells (`width * height`), one byte each.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Create an all-dead grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`, or
    /// `Err(GridError::TooManyCells)` if the area exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            edge,
            cells: vec![false; (width as usize) * (height as usize)],
            population: 0,
        })
    }

    /// Create a grid with the given live cells.
    ///
    /// # Errors
    ///
    /// Everything [`new`](Self::new) rejects, plus
    /// [`GridError::CellOutOfBounds`] for the first cell outside the grid.
    pub fn with_cells(
        width: u32,
        height: u32,
        edge: EdgeBehavior,
        cells: impl IntoIterator<Item = Pos>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height, edge)?;
        for pos in cells {
            grid.set(pos, true)?;
        }
        Ok(grid)
    }

    /// Create a grid filled with a seeded random soup.
    ///
    /// Each cell is independently alive with probability `density`.
    /// See [`random_cells`](crate::random_cells).
    pub fn random(
        width: u32,
        height: u32,
        edge: EdgeBehavior,
        density: f64,
        seed: u64,
    ) -> Result<Self, GridError> {
        let cells = random::random_cells(width, height, density, seed)?;
        Self::with_cells(width, height, edge, cells)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, live or dead.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Set the state of one cell.
    ///
    /// # Errors
    ///
    /// [`GridError::CellOutOfBounds`] if `pos` is outside the grid.
    pub fn set(&mut self, pos: Pos, alive: bool) -> Result<(), GridError> {
        let i = self.checked_index(pos)?;
        if self.cells[i] != alive {
            self.cells[i] = alive;
            if alive {
                self.population += 1;
            } else {
                self.population -= 1;
            }
        }
        Ok(())
    }

    /// Invert the state of one cell, returning its new state.
    ///
    /// # Errors
    ///
    /// [`GridError::CellOutOfBounds`] if `pos` is outside the grid.
    pub fn toggle(&mut self, pos: Pos) -> Result<bool, GridError> {
        let i = self.checked_index(pos)?;
        let alive = !self.cells[i];
        self.set(pos, alive)?;
        Ok(alive)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.population = 0;
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let x = u32::try_from(pos.x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(pos.y).ok().filter(|&y| y < self.height)?;
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn checked_index(&self, pos: Pos) -> Result<usize, GridError> {
        self.index(pos).ok_or(GridError::CellOutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    fn pos_of(&self, index: usize) -> Pos {
        let w = self.width as usize;
        Pos::new((index % w) as i32, (index / w) as i32)
    }
}

/// Validate bounded-grid dimensions without allocating.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    if width > BoundedGrid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: BoundedGrid::MAX_DIM,
        });
    }
    if height > BoundedGrid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height,
            max: BoundedGrid::MAX_DIM,
        });
    }
    let cells = (width as usize).checked_mul(height as usize);
    if cells.is_none_or(|n| n > BoundedGrid::MAX_CELLS) {
        return Err(GridError::TooManyCells {
            width,
            height,
            max: BoundedGrid::MAX_CELLS,
        });
    }
    Ok(())
}

impl Grid for BoundedGrid {
    fn is_alive(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    fn neighbours(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in MOORE_OFFSETS {
            let nx = self.edge.resolve_axis(i64::from(pos.x) + i64::from(dx), self.width);
            let ny = self.edge.resolve_axis(i64::from(pos.y) + i64::from(dy), self.height);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                result.push(Pos::new(nx, ny));
            }
        }
        result
    }

    fn population(&self) -> usize {
        self.population
    }

    fn live_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| self.pos_of(i))
            .collect()
    }

    fn extent(&self) -> Option<Bounds> {
        Some(Bounds::new(
            Pos::ORIGIN,
            Pos::new(self.width as i32 - 1, self.height as i32 - 1),
        ))
    }

    fn with_live_cells(&self, cells: Vec<Pos>) -> Self {
        let mut next = Self {
            width: self.width,
            height: self.height,
            edge: self.edge,
            cells: vec![false; self.cells.len()],
            population: 0,
        };
        for pos in cells {
            if let Some(i) = next.index(pos) {
                if !next.cells[i] {
                    next.cells[i] = true;
                    next.population += 1;
                }
            }
        }
        next
    }
}
