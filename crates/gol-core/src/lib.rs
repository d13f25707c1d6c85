//! Core types for the gol Game of Life workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by every other crate: cell
//! positions, generation counters, birth/survival rules, and the parser
//! for initial live-cell input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod parse;
pub mod pos;
pub mod rule;

pub use error::ParseError;
pub use id::Generation;
pub use parse::{parse_cell, parse_cells};
pub use pos::{Pos, MOORE_OFFSETS};
pub use rule::Rule;
