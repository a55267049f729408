//! Directional rules.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The rule a single-breakpoint query applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// Viewport width at or above the breakpoint (`min-width`).
    #[default]
    Up,
    /// Viewport width below the next larger breakpoint (`max-width`).
    Down,
    /// Viewport width between the breakpoint and the next larger one.
    Only,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Up => "up",
            Rule::Down => "down",
            Rule::Only => "only",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Rule::Up),
            "down" => Ok(Rule::Down),
            "only" => Ok(Rule::Only),
            _ => Err(Error::UnknownRule(s.to_string())),
        }
    }
}

/// Direction of one rendered condition clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `min-width`
    Up,
    /// `max-width`
    Down,
}

impl From<Rule> for Direction {
    /// `Only` renders its lower edge, so it maps to `Up`.
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Down => Direction::Down,
            Rule::Up | Rule::Only => Direction::Up,
        }
    }
}
