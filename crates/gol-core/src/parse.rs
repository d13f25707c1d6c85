//! Parsing of initial live-cell input.
//!
//! Input is a list of `x,y` pairs separated by whitespace or `;`. Each
//! pair may be wrapped in parentheses: `0,1 (1,2);2,0` is three cells.
//! Components must be plain `i32` literals; spaces inside a pair are not
//! allowed.

use crate::error::ParseError;
use crate::pos::Pos;

/// Parse a list of live cells.
///
/// Duplicates are kept; grids deduplicate on construction. An empty or
/// all-whitespace input yields an empty list.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, naming the offending
/// token and its 1-based position.
pub fn parse_cells(input: &str) -> Result<Vec<Pos>, ParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_cell(token, i + 1))
        .collect()
}

/// Parse a single `x,y` (or `(x,y)`) token.
///
/// `position` is the 1-based index reported in errors.
pub fn parse_cell(token: &str, position: usize) -> Result<Pos, ParseError> {
    let malformed = || ParseError::MalformedCell {
        token: token.to_string(),
        position,
    };

    let inner = match token.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')').ok_or_else(malformed)?,
        None => token,
    };

    let (xs, ys) = inner.split_once(',').ok_or_else(malformed)?;
    if xs.is_empty() || ys.is_empty() || ys.contains(',') {
        return Err(malformed());
    }

    let component = |s: &str| {
        s.parse::<i32>().map_err(|source| ParseError::InvalidInteger {
            token: s.to_string(),
            position,
            source,
        })
    };

    Ok(Pos::new(component(xs)?, component(ys)?))
}
