//! Integer cell positions and the Moore neighbourhood.

use crate::error::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// All 8 Moore offsets as `(dx, dy)`: N, S, W, E, NW, NE, SW, SE.
///
/// `y` grows downward, so "north" is `dy = -1`.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A cell position on the plane.
///
/// `x` is the column and `y` the row. Positions order row-major
/// (`y` first, then `x`), which is the canonical order used for
/// live-cell listings and text rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pos {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    /// Create a position from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position, or `None` if either axis overflows `i32`.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        Some(Pos {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The representable Moore neighbours of this position.
    ///
    /// Yields up to 8 positions in [`MOORE_OFFSETS`] order. Neighbours
    /// that would overflow `i32` are skipped; they lie outside every grid
    /// and therefore count as dead.
    pub fn moore(self) -> impl Iterator<Item = Pos> {
        MOORE_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Chebyshev (L-inf) distance, the number of king moves between cells.
    pub fn chebyshev(self, other: Pos) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Pos {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_cell(s, 1)
    }
}
