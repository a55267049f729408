//! WASM bindings for resolving media queries from JavaScript.
//!
//! Breakpoint tables are passed as JSON objects (`{"sm": 0, "md": 768}`);
//! key order is kept.

use wasm_bindgen::prelude::*;

use crate::{BreakpointTable, Query, Rule, resolve};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_table(breakpoints: &str) -> Result<BreakpointTable, JsValue> {
    serde_json::from_str(breakpoints).map_err(to_js)
}

/// Resolve a media condition, e.g. `(min-width: 768px) and (max-width: 1023px)`.
///
/// `rule` is one of `"up"`, `"down"`, `"only"`. Passing `bound` selects a
/// range between the two breakpoints.
#[wasm_bindgen(js_name = resolveCondition)]
pub fn resolve_condition(
    breakpoints: &str,
    key: &str,
    rule: &str,
    bound: Option<String>,
) -> Result<String, JsValue> {
    let table = parse_table(breakpoints)?;
    let rule: Rule = rule.parse().map_err(to_js)?;
    crate::resolve_condition(&table, key, rule, bound.as_deref()).map_err(to_js)
}

/// Like [`resolve_condition`], prefixed with `@media only screen and`.
#[wasm_bindgen(js_name = mediaQuery)]
pub fn media_query(
    breakpoints: &str,
    key: &str,
    rule: &str,
    bound: Option<String>,
) -> Result<String, JsValue> {
    let table = parse_table(breakpoints)?;
    let rule: Rule = rule.parse().map_err(to_js)?;
    let condition = resolve(&table, Query::new(key, rule, bound.as_deref())).map_err(to_js)?;
    Ok(condition.to_media())
}

/// Breakpoint names in declaration order.
#[wasm_bindgen(js_name = breakpointNames)]
pub fn breakpoint_names(breakpoints: &str) -> Result<Vec<String>, JsValue> {
    let table = parse_table(breakpoints)?;
    Ok(table.names().map(str::to_string).collect())
}
