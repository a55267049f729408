//! Named breakpoint table.
//!
//! A [`BreakpointTable`] maps breakpoint names to pixel widths. Declaration
//! order is preserved for listing, while lookups that depend on width order
//! (such as finding the next larger breakpoint) go through an ascending copy
//! of the widths built once at construction.
//!
//! # Example
//!
//! ```
//! use breakpoints::BreakpointTable;
//!
//! let table = BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024)]).unwrap();
//! assert_eq!(table.get("md"), Some(768));
//! assert_eq!(table.names().collect::<Vec<_>>(), ["sm", "md", "lg"]);
//! ```

use crate::error::{Error, Result};

/// A single named breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    /// Breakpoint name (e.g., "md").
    pub name: String,
    /// Threshold width in pixels.
    pub width: u32,
}

/// Immutable mapping from breakpoint name to pixel width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointTable {
    /// Entries in declaration order.
    entries: Vec<Breakpoint>,
    /// All widths, sorted ascending.
    ascending: Vec<u32>,
}

impl BreakpointTable {
    /// Build a table from `(name, width)` pairs.
    ///
    /// Names and widths must both be unique. An empty iterator yields an
    /// empty table; operations that need a breakpoint report
    /// [`Error::EmptyTable`] on it.
    pub fn new<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let mut table = BreakpointTable::default();
        for (name, width) in entries {
            table.insert(name.into(), width)?;
        }
        Ok(table)
    }

    fn insert(&mut self, name: String, width: u32) -> Result<()> {
        if self.entries.iter().any(|bp| bp.name == name) {
            return Err(Error::DuplicateBreakpoint(name));
        }
        if let Some(existing) = self.entries.iter().find(|bp| bp.width == width) {
            return Err(Error::DuplicateWidth {
                width,
                first: existing.name.clone(),
                second: name,
            });
        }

        let pos = self.ascending.partition_point(|&w| w < width);
        self.ascending.insert(pos, width);
        self.entries.push(Breakpoint { name, width });
        Ok(())
    }

    /// Width of the named breakpoint, if present.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|bp| bp.name == name)
            .map(|bp| bp.width)
    }

    /// Width of the named breakpoint, or [`Error::UnknownBreakpoint`].
    pub fn width(&self, name: &str) -> Result<u32> {
        self.get(name)
            .ok_or_else(|| Error::UnknownBreakpoint(name.to_string()))
    }

    /// Check whether a breakpoint with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over breakpoints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    /// Breakpoint names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|bp| bp.name.as_str())
    }

    /// All widths, smallest first.
    pub fn ascending_widths(&self) -> &[u32] {
        &self.ascending
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a BreakpointTable {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
