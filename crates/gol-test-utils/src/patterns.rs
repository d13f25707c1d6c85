//! Classic Game of Life patterns in `(x, y)` form, `y` growing downward.

use gol_core::Pos;
use gol_grid::{BoundedGrid, EdgeBehavior, SparseGrid};

/// A named pattern anchored near the origin.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
    /// Oscillation period, `1` for still lifes, `None` for patterns that
    /// move or evolve.
    pub period: Option<u32>,
}

impl Pattern {
    /// The pattern's positions in canonical order.
    pub fn positions(&self) -> Vec<Pos> {
        self.at(0, 0)
    }

    /// The pattern's positions shifted by `(dx, dy)`, canonical order.
    pub fn at(&self, dx: i32, dy: i32) -> Vec<Pos> {
        let cells = crate::cells(self.cells);
        crate::translated(&cells, dx, dy)
    }

    /// The pattern on an unbounded grid.
    pub fn sparse(&self) -> SparseGrid {
        SparseGrid::from_cells(self.positions())
    }

    /// The pattern placed at `(dx, dy)` on a bounded grid.
    pub fn bounded(&self, width: u32, height: u32, edge: EdgeBehavior, dx: i32, dy: i32) -> BoundedGrid {
        BoundedGrid::with_cells(width, height, edge, self.at(dx, dy))
            .unwrap_or_else(|e| panic!("{} does not fit {width}x{height}: {e}", self.name))
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    period: Some(1),
};

pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    period: Some(1),
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
    period: Some(2),
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    period: Some(2),
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    period: Some(2),
};

/// Travels `(+1, +1)` every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    period: None,
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    period: None,
};

/// Emits a glider every 30 generations.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (24, 0),
        (22, 1), (24, 1),
        (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
        (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
        (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
        (10, 6), (16, 6), (24, 6),
        (11, 7), (15, 7),
        (12, 8), (13, 8),
    ],
    period: None,
};

/// Every fixture, for table-driven tests.
pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BEEHIVE,
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

/// Fixtures that repeat in place.
pub fn oscillators() -> impl Iterator<Item = &'static Pattern> {
    PATTERNS.iter().filter(|p| p.period.is_some())
}
