//! Plain-text rendering: `O` for live cells, `.` for dead ones.

use crate::bounds::Bounds;
use crate::grid::Grid;
use gol_core::Pos;

/// Character used for a live cell.
pub const LIVE: char = 'O';
/// Character used for a dead cell.
pub const DEAD: char = '.';

/// Largest area [`try_render_grid`] will draw.
pub const MAX_RENDER_AREA: u64 = 1 << 22;

/// Render the cells inside `bounds`, one line per row, top row first.
///
/// Every line, including the last, ends with `\n`. The output holds one
/// character per position in `bounds`; check [`Bounds::area`] first when
/// the bounds come from untrusted input.
pub fn render<G: Grid>(grid: &G, bounds: Bounds) -> String {
    let cap = (bounds.width() + 1).saturating_mul(bounds.height()).min(1 << 20);
    let mut out = String::with_capacity(cap as usize);
    for y in bounds.min.y..=bounds.max.y {
        for x in bounds.min.x..=bounds.max.x {
            let c = if grid.is_alive(Pos::new(x, y)) {
                LIVE
            } else {
                DEAD
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

/// Render a grid over its [`extent`](Grid::extent).
///
/// A bounded grid renders its whole area; an unbounded grid renders the
/// bounding box of its live cells, so an empty one renders as `""`.
pub fn render_grid<G: Grid>(grid: &G) -> String {
    grid.extent()
        .map(|bounds| render(grid, bounds))
        .unwrap_or_default()
}

/// Like [`render_grid`], but `None` when the extent is larger than
/// [`MAX_RENDER_AREA`].
///
/// Two live cells far apart on an unbounded grid span a box far too large
/// to draw.
pub fn try_render_grid<G: Grid>(grid: &G) -> Option<String> {
    match grid.extent() {
        None => Some(String::new()),
        Some(bounds) if bounds.area() > MAX_RENDER_AREA => None,
        Some(bounds) => Some(render(grid, bounds)),
    }
}
