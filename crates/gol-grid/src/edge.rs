//! Edge (boundary) behavior for bounded grids.

/// How a [`BoundedGrid`](crate::BoundedGrid) treats neighbours past its edges.
///
/// # Examples
///
/// ```
/// use gol_core::Pos;
/// use gol_grid::{BoundedGrid, EdgeBehavior, Grid};
///
/// // Absorb: corner has 3 neighbours, interior has 8.
/// let absorb = BoundedGrid::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Pos::new(0, 0)).len(), 3);
/// assert_eq!(absorb.neighbours(Pos::new(1, 1)).len(), 8);
///
/// // Wrap: every cell has exactly 8 neighbours (torus).
/// let wrap = BoundedGrid::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(Pos::new(0, 0)).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Cells past the edge are permanently dead and omitted from neighbourhoods.
    #[default]
    Absorb,
    /// Out-of-bounds neighbours wrap to the opposite side (torus).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve one axis coordinate against an axis of length `len`.
    ///
    /// Returns `None` when an [`Absorb`](Self::Absorb) coordinate falls
    /// outside `0..len`. Computed in `i64` so callers may pass
    /// coordinates that are one step past `i32` range.
    pub(crate) fn resolve_axis(self, val: i64, len: u32) -> Option<i32> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return i32::try_from(val).ok();
        }
        match self {
            Self::Absorb => None,
            Self::Wrap => i32::try_from(val.rem_euclid(n)).ok(),
        }
    }
}
