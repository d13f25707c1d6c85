//! Error types for load-time input validation.
//!
//! The simulation itself cannot fail; the only errors in the workspace
//! arise while turning user input into positions and rules.

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

/// Errors from parsing initial live-cell input or a rule string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A cell token is not of the form `x,y`.
    MalformedCell {
        /// The offending token.
        token: String,
        /// 1-based position of the token in the input.
        position: usize,
    },
    /// A coordinate component is not an `i32`.
    InvalidInteger {
        /// The offending component.
        token: String,
        /// 1-based position of the cell token in the input.
        position: usize,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
    /// A rule string is not valid `B/S` notation.
    InvalidRule {
        /// The rule string as given.
        rule: String,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCell { token, position } => {
                write!(f, "cell #{position} '{token}' is not of the form x,y")
            }
            Self::InvalidInteger {
                token,
                position,
                source,
            } => {
                write!(f, "cell #{position}: '{token}' is not an integer: {source}")
            }
            Self::InvalidRule { rule, reason } => {
                write!(f, "invalid rule '{rule}': {reason}")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInteger { source, .. } => Some(source),
            _ => None,
        }
    }
}
