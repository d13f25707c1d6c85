//! Grid representations for Game of Life simulations.
//!
//! This crate defines the [`Grid`] trait, the spatial abstraction the
//! step engine reads from and produces, along with concrete backends and
//! helpers for building and printing grids.
//!
//! # Backends
//!
//! - [`SparseGrid`]: conceptually infinite plane storing only live cells
//! - [`BoundedGrid`]: finite `width x height` array with an [`EdgeBehavior`]
//!   (absorb or wrap)
//! - [`LifeGrid`]: either of the above, chosen at runtime
//!
//! # Helpers
//!
//! - [`Bounds`]: inclusive bounding boxes
//! - [`text`]: plain-text rendering (`O` live, `.` dead)
//! - [`random`]: seeded random soups

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod bounds;
pub mod edge;
pub mod error;
pub mod grid;
pub mod life;
pub mod random;
pub mod sparse;
pub mod text;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounded::BoundedGrid;
pub use bounds::Bounds;
pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::Grid;
pub use life::LifeGrid;
pub use random::{random_cells, DEFAULT_DENSITY};
pub use sparse::SparseGrid;
