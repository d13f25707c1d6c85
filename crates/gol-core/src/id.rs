//! Strongly-typed generation counter.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Generation 0 is the initial configuration. Incremented each time the
/// simulation advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The initial generation.
    pub const ZERO: Generation = Generation(0);

    /// The generation following this one.
    ///
    /// Saturates at `u64::MAX` rather than wrapping back to zero.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
