//! Seeded random soups.
//!
//! Respects the determinism contract: uses a seeded ChaCha8 RNG, so the
//! same `(width, height, density, seed)` always yields the same cells on
//! every platform.

use crate::bounded;
use crate::error::GridError;
use gol_core::Pos;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default fraction of live cells in a random soup (one in three).
pub const DEFAULT_DENSITY: f64 = 1.0 / 3.0;

/// Live cells of a random `width x height` soup anchored at the origin.
///
/// Each cell is alive independently with probability `density`. Cells are
/// returned in row-major order.
///
/// # Errors
///
/// [`GridError::InvalidDensity`] if `density` is not within `[0, 1]`, and
/// the dimension errors of [`BoundedGrid::new`](crate::BoundedGrid::new).
pub fn random_cells(
    width: u32,
    height: u32,
    density: f64,
    seed: u64,
) -> Result<Vec<Pos>, GridError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidDensity { value: density });
    }
    bounded::check_dimensions(width, height)?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = Vec::new();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.random_bool(density) {
                cells.push(Pos::new(x, y));
            }
        }
    }
    Ok(cells)
}
