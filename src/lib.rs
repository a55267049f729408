//! # breakpoints
//!
//! Turn a table of named pixel breakpoints into CSS media-query conditions.
//!
//! ## Features
//!
//! - `up`, `down` and `only` queries keyed by breakpoint name
//! - Closed ranges between two breakpoints, in either argument order
//! - Pluggable style wrapping via [`StyleWrapper`], with a CSS text wrapper
//!   included ([`CssWrapper`])
//! - Breakpoint tables from TOML or JSON config files (`config` feature)
//!
//! ## Quick Start
//!
//! ```
//! use breakpoints::{BreakpointTable, Rule, resolve_condition};
//!
//! let table = BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024)]).unwrap();
//!
//! assert_eq!(resolve_condition(&table, "sm", Rule::Up, None).unwrap(), "(min-width: 0px)");
//! assert_eq!(resolve_condition(&table, "sm", Rule::Down, None).unwrap(), "(max-width: 767px)");
//! assert_eq!(
//!     resolve_condition(&table, "md", Rule::Only, None).unwrap(),
//!     "(min-width: 768px) and (max-width: 1023px)"
//! );
//! ```
//!
//! ## Wrapping Styles
//!
//! ```
//! use breakpoints::{BreakpointTable, CssWrapper, Media};
//!
//! let table = BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024)]).unwrap();
//! let media = Media::new(table, CssWrapper);
//!
//! let css = media.up("lg").unwrap().apply("padding: 2rem;").unwrap();
//! assert_eq!(css, "@media only screen and (min-width: 1024px) { padding: 2rem; }");
//! ```

pub mod compose;
#[cfg(feature = "config")]
pub mod config;
pub mod css;
pub mod error;
pub mod mixin;
pub mod normalize;
pub mod render;
pub mod resolve;
pub mod rule;
pub mod table;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use compose::{Query, resolve, resolve_condition};
#[cfg(feature = "config")]
pub use config::Config;
pub use css::CssWrapper;
pub use error::{Error, Result};
pub use mixin::{Media, Mixin, StyleWrapper};
pub use normalize::normalize;
pub use render::{Clause, ResolvedCondition, ToCss};
pub use resolve::{bound_below, next_width, smallest_width};
pub use rule::{Direction, Rule};
pub use table::{Breakpoint, BreakpointTable};
