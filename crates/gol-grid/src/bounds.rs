//! Inclusive bounding boxes over cell positions.

use gol_core::Pos;

/// An inclusive, non-empty rectangle of positions.
///
/// `min` holds the smallest `x` and `y`, `max` the largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Top-left corner.
    pub min: Pos,
    /// Bottom-right corner.
    pub max: Pos,
}

impl Bounds {
    /// Create bounds from two corners in any order.
    pub fn new(a: Pos, b: Pos) -> Self {
        Self {
            min: Pos::new(a.x.min(b.x), a.y.min(b.y)),
            max: Pos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The smallest bounds containing every position, or `None` if empty.
    pub fn enclosing(cells: impl IntoIterator<Item = Pos>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| b.including(p)))
    }

    /// Bounds grown to contain `pos`.
    pub fn including(self, pos: Pos) -> Self {
        Self {
            min: Pos::new(self.min.x.min(pos.x), self.min.y.min(pos.y)),
            max: Pos::new(self.max.x.max(pos.x), self.max.y.max(pos.y)),
        }
    }

    /// Number of columns covered.
    pub fn width(&self) -> u64 {
        u64::from(self.max.x.abs_diff(self.min.x)) + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> u64 {
        u64::from(self.max.y.abs_diff(self.min.y)) + 1
    }

    /// Number of positions inside, saturating at `u64::MAX`.
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Whether `pos` lies inside the bounds.
    pub fn contains(&self, pos: Pos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x) && (self.min.y..=self.max.y).contains(&pos.y)
    }

    /// The same rectangle shifted by `(dx, dy)`, or `None` on `i32` overflow.
    pub fn translate(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            min: self.min.offset(dx, dy)?,
            max: self.max.offset(dx, dy)?,
        })
    }
}
