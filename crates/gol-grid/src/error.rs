//! Error types for grid construction and editing.

use gol_core::Pos;
use std::fmt;

/// Errors arising from grid construction or edits before a simulation starts.
///
/// Queries never fail: out-of-bounds positions simply read as dead.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a bounded grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A bounded grid's area exceeds the cell limit.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// The largest accepted `width * height`.
        max: usize,
    },
    /// A position lies outside a bounded grid.
    CellOutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A random-fill density is not a probability.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { width, height, max } => {
                write!(f, "grid {width}x{height} exceeds maximum of {max} cells")
            }
            Self::CellOutOfBounds { pos, width, height } => {
                write!(
                    f,
                    "cell ({pos}) out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::InvalidDensity { value } => {
                write!(f, "density {value} is not in [0, 1]")
            }
        }
    }
}

impl std::error::Error for GridError {}
