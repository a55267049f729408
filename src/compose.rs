//! Composition of media conditions from breakpoint queries.
//!
//! A [`Query`] is either a single-direction query on one breakpoint or a
//! closed range between two breakpoints. Supplying a bound key always
//! selects range mode; the rule is only consulted for single queries.
//!
//! # Example
//!
//! ```
//! use breakpoints::{BreakpointTable, Rule, resolve_condition};
//!
//! let table = BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024)]).unwrap();
//!
//! assert_eq!(
//!     resolve_condition(&table, "md", Rule::Only, None).unwrap(),
//!     "(min-width: 768px) and (max-width: 1023px)"
//! );
//! ```

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::render::{Clause, ResolvedCondition, ToCss};
use crate::resolve::{bound_below, next_width};
use crate::rule::Rule;
use crate::table::BreakpointTable;

/// What to resolve against a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query<'a> {
    /// One breakpoint with a directional rule.
    Single { key: &'a str, rule: Rule },
    /// Every width from the lower breakpoint up to (but not including) the
    /// breakpoint after the upper one. Keys may be given in either order.
    Range { from: &'a str, to: &'a str },
}

impl<'a> Query<'a> {
    /// Build a query from a width key, rule and optional bound key.
    pub fn new(width_key: &'a str, rule: Rule, bound_key: Option<&'a str>) -> Self {
        match bound_key {
            Some(to) => Query::Range {
                from: width_key,
                to,
            },
            None => Query::Single {
                key: width_key,
                rule,
            },
        }
    }

    pub fn up(key: &'a str) -> Self {
        Query::Single { key, rule: Rule::Up }
    }

    pub fn down(key: &'a str) -> Self {
        Query::Single {
            key,
            rule: Rule::Down,
        }
    }

    pub fn only(key: &'a str) -> Self {
        Query::Single {
            key,
            rule: Rule::Only,
        }
    }

    pub fn between(from: &'a str, to: &'a str) -> Self {
        Query::Range { from, to }
    }
}

/// Resolve a query to its pixel clauses.
pub fn resolve(table: &BreakpointTable, query: Query<'_>) -> Result<ResolvedCondition> {
    let condition = match query {
        Query::Single { key, rule: Rule::Up } => {
            ResolvedCondition::single(Clause::up(table.width(key)?))
        }
        Query::Single {
            key,
            rule: Rule::Down,
        } => {
            let width = bound_below(table, key).map_err(|err| match err {
                Error::NoHigherBreakpoint { .. } => Error::AmbiguousDownRule {
                    key: key.to_string(),
                },
                other => other,
            })?;
            ResolvedCondition::single(Clause::down(width))
        }
        Query::Single {
            key,
            rule: Rule::Only,
        } => {
            let width = table.width(key)?;
            let next = next_width(table, width)?;
            ResolvedCondition::range(Clause::up(width), Clause::down(next - 1))
        }
        Query::Range { from, to } => {
            let (low, high) = normalize(table, from, Some(to))?;
            let width = table.width(low)?;
            let bound = bound_below(table, high.unwrap_or(low))?;
            ResolvedCondition::range(Clause::up(width), Clause::down(bound))
        }
    };

    tracing::debug!(?query, condition = %condition.to_css_string(), "resolved media query");
    Ok(condition)
}

/// Resolve `width_key` under `rule` (or the range up to `bound_key`) and
/// render the condition text.
pub fn resolve_condition(
    table: &BreakpointTable,
    width_key: &str,
    rule: Rule,
    bound_key: Option<&str>,
) -> Result<String> {
    resolve(table, Query::new(width_key, rule, bound_key)).map(|c| c.to_css_string())
}
