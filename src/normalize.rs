//! Ordering of range keys.

use crate::error::Result;
use crate::table::BreakpointTable;

/// Order a `(width_key, bound_key)` pair so the lower-valued key comes first.
///
/// Without a bound key the width key is returned as is. Both keys must exist
/// in the table.
pub fn normalize<'a>(
    table: &BreakpointTable,
    width_key: &'a str,
    bound_key: Option<&'a str>,
) -> Result<(&'a str, Option<&'a str>)> {
    let width = table.width(width_key)?;
    let Some(bound_key) = bound_key else {
        return Ok((width_key, None));
    };
    let bound = table.width(bound_key)?;

    if width > bound {
        Ok((bound_key, Some(width_key)))
    } else {
        Ok((width_key, Some(bound_key)))
    }
}
