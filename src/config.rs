//! Loading breakpoint tables from config files.
//!
//! A config file holds one `breakpoints` table mapping names to pixel widths:
//!
//! ```toml
//! [breakpoints]
//! sm = 0
//! md = 768
//! lg = 1024
//! ```
//!
//! JSON files use the same shape (`{"breakpoints": {"sm": 0, ...}}`).
//! Declaration order is preserved.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::table::BreakpointTable;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "breakpoints.toml";

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub breakpoints: BreakpointTable,
}

impl Config {
    /// Path of the config file in the current directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Load and validate a config file. The format is chosen by extension:
    /// `.json` for JSON, `.toml` or no extension for TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading breakpoint config");

        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") | None => Self::from_toml_str(&content),
            Some(_) => Err(Error::UnsupportedConfig(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// A config must define at least one breakpoint.
    pub fn validate(&self) -> Result<()> {
        if self.breakpoints.is_empty() {
            return Err(Error::EmptyTable);
        }
        tracing::debug!(count = self.breakpoints.len(), "breakpoint config valid");
        Ok(())
    }
}

impl Serialize for BreakpointTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for bp in self {
            map.serialize_entry(&bp.name, &bp.width)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BreakpointTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = BreakpointTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of breakpoint names to pixel widths")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, width)) = map.next_entry::<String, u32>()? {
            entries.push((name, width));
        }
        BreakpointTable::new(entries).map_err(de::Error::custom)
    }
}
