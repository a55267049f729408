//! Error types for breakpoint resolution.

use thiserror::Error;

/// Errors that can occur while building a table or resolving a media query.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no breakpoints defined")]
    EmptyTable,

    #[error("the breakpoint of value {width}px is the highest, did you mean to use `up`?")]
    NoHigherBreakpoint { width: u32 },

    #[error("the breakpoint `{key}` is the highest, do you need more breakpoints?")]
    AmbiguousDownRule { key: String },

    #[error("unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    #[error("breakpoint `{0}` is defined more than once")]
    DuplicateBreakpoint(String),

    #[error("breakpoints `{first}` and `{second}` share the width {width}px")]
    DuplicateWidth {
        width: u32,
        first: String,
        second: String,
    },

    #[error("unknown rule `{0}` (expected up, down or only)")]
    UnknownRule(String),

    #[error("invalid style block: {0}")]
    InvalidStyle(String),

    #[cfg(feature = "config")]
    #[error("failed to read config file '{path}': {source}")]
    ReadConfig {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "config")]
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "config")]
    #[error("unsupported config format: {0}")]
    UnsupportedConfig(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
