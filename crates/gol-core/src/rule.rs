//! Outer-totalistic birth/survival rules in `B/S` notation.
//!
//! A [`Rule`] decides a cell's next state from its current state and its
//! live-neighbour count alone. [`Rule::CONWAY`] (`B3/S23`) is the
//! classic Game of Life and the default everywhere in the workspace:
//!
//! - a live cell with fewer than 2 or more than 3 live neighbours dies;
//! - a live cell with 2 or 3 live neighbours survives;
//! - a dead cell with exactly 3 live neighbours becomes alive.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Largest possible Moore-neighbourhood count.
const MAX_NEIGHBOURS: u8 = 8;

/// A birth/survival rule over the Moore neighbourhood.
///
/// Stored as two 9-bit masks: bit `n` set means "applies with `n` live
/// neighbours". Birth on 0 neighbours is unrepresentable; the step
/// engine only evaluates cells near live ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Rule {
    /// Conway's Game of Life, `B3/S23`.
    pub const CONWAY: Rule = Rule {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    /// Build a rule from explicit birth and survival counts.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidRule`] if any count exceeds 8 or the
    /// birth set contains 0.
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, ParseError> {
        let describe = || format!("B{}/S{}", digits(birth), digits(survival));
        let birth_mask = mask(birth).ok_or_else(|| ParseError::InvalidRule {
            rule: describe(),
            reason: "neighbour counts must be in 0..=8".into(),
        })?;
        let survival_mask = mask(survival).ok_or_else(|| ParseError::InvalidRule {
            rule: describe(),
            reason: "neighbour counts must be in 0..=8".into(),
        })?;
        if birth_mask & 1 != 0 {
            return Err(ParseError::InvalidRule {
                rule: describe(),
                reason: "birth on 0 neighbours (B0) is not supported".into(),
            });
        }
        Ok(Self {
            birth: birth_mask,
            survival: survival_mask,
        })
    }

    /// Parse `B/S` notation, e.g. `B3/S23` or `s23/b36`.
    ///
    /// Case-insensitive; the two parts may appear in either order and
    /// either may be empty (`B3/S`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidRule`] describing the first problem.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let invalid = |reason: &str| ParseError::InvalidRule {
            rule: s.to_string(),
            reason: reason.to_string(),
        };

        let (first, second) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected '/' between birth and survival parts"))?;

        let mut birth = None;
        let mut survival = None;
        for part in [first, second] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(invalid("each part must start with 'B' or 'S'")),
            };
            if slot.is_some() {
                return Err(invalid("duplicate part"));
            }
            let counts = chars
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| invalid("neighbour counts must be digits"))
                })
                .collect::<Result<Vec<u8>, _>>()?;
            *slot = Some(counts);
        }

        let (Some(birth), Some(survival)) = (birth, survival) else {
            return Err(invalid("both a 'B' and an 'S' part are required"));
        };
        Self::new(&birth, &survival).map_err(|err| match err {
            ParseError::InvalidRule { reason, .. } => ParseError::InvalidRule {
                rule: s.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Whether a dead cell with `n` live neighbours becomes alive.
    pub fn births_on(&self, n: u8) -> bool {
        n <= MAX_NEIGHBOURS && self.birth & (1 << n) != 0
    }

    /// Whether a live cell with `n` live neighbours stays alive.
    pub fn survives_on(&self, n: u8) -> bool {
        n <= MAX_NEIGHBOURS && self.survival & (1 << n) != 0
    }

    /// The next state of a cell given its current state and live-neighbour count.
    pub fn next_state(&self, alive: bool, live_neighbours: u8) -> bool {
        if alive {
            self.survives_on(live_neighbours)
        } else {
            self.births_on(live_neighbours)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in 0..=MAX_NEIGHBOURS {
            if self.births_on(n) {
                write!(f, "{n}")?;
            }
        }
        f.write_str("/S")?;
        for n in 0..=MAX_NEIGHBOURS {
            if self.survives_on(n) {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn mask(counts: &[u8]) -> Option<u16> {
    counts.iter().try_fold(0u16, |acc, &n| {
        (n <= MAX_NEIGHBOURS).then(|| acc | (1 << n))
    })
}

fn digits(counts: &[u8]) -> String {
    counts.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_transitions() {
        let r = Rule::CONWAY;
        for n in 0..=8 {
            assert_eq!(r.next_state(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(r.next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn counts_above_eight_never_apply() {
        let r = Rule::new(&[3], &[2, 3, 8]).unwrap();
        assert!(!r.next_state(true, 9));
        assert!(!r.next_state(false, 200));
    }

    #[test]
    fn parse_conway_forms() {
        for s in ["B3/S23", "b3/s23", "S23/B3", " B3/S32 "] {
            assert_eq!(Rule::parse(s).unwrap(), Rule::CONWAY, "{s}");
        }
    }

    #[test]
    fn parse_highlife_and_display() {
        let r: Rule = "B36/S23".parse().unwrap();
        assert!(r.births_on(6));
        assert_eq!(r.to_string(), "B36/S23");
        assert_eq!(Rule::CONWAY.to_string(), "B3/S23");
    }

    #[test]
    fn parse_allows_empty_part() {
        let seeds = Rule::parse("B2/S").unwrap();
        assert!(seeds.births_on(2));
        assert!((0..=8).all(|n| !seeds.survives_on(n)));
        assert_eq!(seeds.to_string(), "B2/S");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["B3S23", "B3/X23", "B3/B3", "B3/S2a", "B9/S23", "", "/"] {
            assert!(
                matches!(Rule::parse(bad), Err(ParseError::InvalidRule { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn birth_on_zero_is_rejected() {
        let err = Rule::parse("B03/S23").unwrap_err();
        match err {
            ParseError::InvalidRule { rule, reason } => {
                assert_eq!(rule, "B03/S23");
                assert!(reason.contains("B0"));
            }
            other => panic!("expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn default_is_conway() {
        assert_eq!(Rule::default(), Rule::CONWAY);
    }
}
