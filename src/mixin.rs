//! Breakpoint accessors that wrap style blocks in `@media` rules.
//!
//! The styling engine is injected as a [`StyleWrapper`]. Any closure
//! `Fn(&str, S) -> O` works, as does the bundled [`CssWrapper`](crate::CssWrapper):
//!
//! ```
//! use breakpoints::{BreakpointTable, Media};
//!
//! let table = BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024)]).unwrap();
//! let media = Media::new(table, |media: &str, style: &str| format!("{media} {{ {style} }}"));
//!
//! let css = media.only("md").unwrap().apply("display: none;");
//! assert_eq!(
//!     css,
//!     "@media only screen and (min-width: 768px) and (max-width: 1023px) { display: none; }"
//! );
//! ```
//!
//! Queries are resolved when a [`Mixin`] is built, so a bad key or a `down`
//! on the highest breakpoint is reported before any style is applied.

use crate::compose::{Query, resolve};
use crate::error::Result;
use crate::rule::Rule;
use crate::table::BreakpointTable;

/// Capability that places a style payload inside a media rule.
pub trait StyleWrapper<S> {
    type Output;

    /// Wrap `style` in the rule whose prelude is `media`
    /// (`@media only screen and ...`).
    fn wrap(&self, media: &str, style: S) -> Self::Output;
}

impl<S, O, F> StyleWrapper<S> for F
where
    F: Fn(&str, S) -> O,
{
    type Output = O;

    fn wrap(&self, media: &str, style: S) -> O {
        self(media, style)
    }
}

/// A resolved media rule bound to a wrapper.
#[derive(Debug, Clone)]
pub struct Mixin<'w, W> {
    media: String,
    wrapper: &'w W,
}

impl<'w, W> Mixin<'w, W> {
    /// The `@media only screen and ...` prelude.
    pub fn media(&self) -> &str {
        &self.media
    }

    /// Wrap a style payload in this media rule.
    pub fn apply<S>(&self, style: S) -> W::Output
    where
        W: StyleWrapper<S>,
    {
        self.wrapper.wrap(&self.media, style)
    }
}

/// Named breakpoint accessors over one table.
#[derive(Debug, Clone)]
pub struct Media<W> {
    table: BreakpointTable,
    wrapper: W,
}

impl<W> Media<W> {
    pub fn new(table: BreakpointTable, wrapper: W) -> Self {
        Media { table, wrapper }
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Build a mixin for an explicit query.
    pub fn query(&self, query: Query<'_>) -> Result<Mixin<'_, W>> {
        let condition = resolve(&self.table, query)?;
        Ok(Mixin {
            media: condition.to_media(),
            wrapper: &self.wrapper,
        })
    }

    /// Build a mixin from a width key, rule and optional bound key.
    pub fn mixin(
        &self,
        width_key: &str,
        rule: Rule,
        bound_key: Option<&str>,
    ) -> Result<Mixin<'_, W>> {
        self.query(Query::new(width_key, rule, bound_key))
    }

    /// `min-width` at `key`.
    pub fn up(&self, key: &str) -> Result<Mixin<'_, W>> {
        self.query(Query::up(key))
    }

    /// `max-width` just below the breakpoint after `key`.
    pub fn down(&self, key: &str) -> Result<Mixin<'_, W>> {
        self.query(Query::down(key))
    }

    /// The band from `key` up to the next breakpoint.
    pub fn only(&self, key: &str) -> Result<Mixin<'_, W>> {
        self.query(Query::only(key))
    }

    /// The band from the lower of `from`/`to` through the upper one.
    pub fn between(&self, from: &str, to: &str) -> Result<Mixin<'_, W>> {
        self.query(Query::between(from, to))
    }

    /// Breakpoint names in declaration order.
    pub fn list(&self) -> Vec<&str> {
        self.table.names().collect()
    }

    /// An `up` mixin for every breakpoint, in declaration order.
    pub fn shorthands(&self) -> Result<Vec<(&str, Mixin<'_, W>)>> {
        self.table
            .names()
            .map(|name| self.up(name).map(|mixin| (name, mixin)))
            .collect()
    }
}
