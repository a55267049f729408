//! Pixel threshold lookups over a [`BreakpointTable`].
//!
//! All lookups go through the table's ascending widths, so results never
//! depend on the order breakpoints were declared in.

use crate::error::{Error, Result};
use crate::table::BreakpointTable;

/// The smallest width in the table.
pub fn smallest_width(table: &BreakpointTable) -> Result<u32> {
    table
        .ascending_widths()
        .first()
        .copied()
        .ok_or(Error::EmptyTable)
}

/// The smallest breakpoint width strictly greater than `width`.
///
/// Fails with [`Error::NoHigherBreakpoint`] when `width` is already at or
/// above the largest breakpoint.
pub fn next_width(table: &BreakpointTable, width: u32) -> Result<u32> {
    let widths = table.ascending_widths();
    if widths.is_empty() {
        return Err(Error::EmptyTable);
    }

    let idx = widths.partition_point(|&w| w <= width);
    let next = widths
        .get(idx)
        .copied()
        .ok_or(Error::NoHigherBreakpoint { width })?;

    tracing::trace!(width, next, "next breakpoint");
    Ok(next)
}

/// One pixel below the next breakpoint larger than `key`.
///
/// This is the inclusive upper edge of the band that starts at `key`.
pub fn bound_below(table: &BreakpointTable, key: &str) -> Result<u32> {
    let width = table.width(key)?;
    // next > width >= 0, so this cannot underflow
    Ok(next_width(table, width)? - 1)
}
