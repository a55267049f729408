//! Rendering of media-query conditions to CSS text.
//!
//! The textual shape produced here is what style engines receive, e.g.
//! `@media only screen and (min-width: 768px) and (max-width: 1023px)`.

use crate::rule::{Direction, Rule};

/// Prefix placed in front of every rendered condition.
pub const MEDIA_PREFIX: &str = "@media only screen and ";

/// Trait for converting condition values to CSS strings.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// Media feature name for a rule. Anything that is not `Down` renders as
/// `min-width`.
pub fn width_rule_name(rule: Rule) -> &'static str {
    Direction::from(rule).feature_name()
}

/// Render a single condition clause: `(min-width: 768px)`.
pub fn condition_clause(rule_name: &str, width: u32) -> String {
    format!("({rule_name}: {width}px)")
}

/// Prefix a condition with the `@media` rule.
pub fn media_wrapper(condition: &str) -> String {
    format!("{MEDIA_PREFIX}{condition}")
}

impl Direction {
    pub fn feature_name(self) -> &'static str {
        match self {
            Direction::Up => "min-width",
            Direction::Down => "max-width",
        }
    }
}

impl ToCss for Direction {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self.feature_name());
    }
}

/// One `(feature: Npx)` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clause {
    pub direction: Direction,
    pub width: u32,
}

impl Clause {
    pub fn up(width: u32) -> Self {
        Clause {
            direction: Direction::Up,
            width,
        }
    }

    pub fn down(width: u32) -> Self {
        Clause {
            direction: Direction::Down,
            width,
        }
    }
}

impl ToCss for Clause {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&condition_clause(self.direction.feature_name(), self.width));
    }
}

/// A resolved media condition: one clause, or two ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedCondition {
    pub base: Clause,
    pub bound: Option<Clause>,
}

impl ResolvedCondition {
    pub fn single(base: Clause) -> Self {
        ResolvedCondition { base, bound: None }
    }

    pub fn range(base: Clause, bound: Clause) -> Self {
        ResolvedCondition {
            base,
            bound: Some(bound),
        }
    }

    /// Clauses in render order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        std::iter::once(&self.base).chain(self.bound.as_ref())
    }

    /// The full `@media only screen and ...` prelude.
    pub fn to_media(&self) -> String {
        media_wrapper(&self.to_css_string())
    }
}

impl ToCss for ResolvedCondition {
    fn to_css(&self, buf: &mut String) {
        self.base.to_css(buf);
        if let Some(bound) = &self.bound {
            buf.push_str(" and ");
            bound.to_css(buf);
        }
    }
}
