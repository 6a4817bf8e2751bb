//! The declarative compatibility table.
//!
//! ```json
//! {
//!   "all_versions": ["v22.1.1", "v22.2.1", "v22.3.1"],
//!   "not_compatible": {
//!     "v22.2.1": [">v22.1.1", "+v22.3.1"]
//!   }
//! }
//! ```
//!
//! The same shape is accepted as TOML when the file has a `.toml` extension.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw table as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatTable {
    /// Versions in chronological release order.
    pub all_versions: Vec<String>,
    /// Exception directives keyed by the version whose row they modify.
    #[serde(default, alias = "not_compatbile")]
    pub not_compatible: BTreeMap<String, Vec<String>>,
}

/// On-disk encoding of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Toml,
}

impl TableFormat {
    /// Pick a format from the file extension. Anything other than `.toml`
    /// is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => TableFormat::Toml,
            _ => TableFormat::Json,
        }
    }
}

impl CompatTable {
    /// Parse a table from a string in the given format.
    pub fn parse(content: &str, format: TableFormat) -> Result<Self> {
        let table = match format {
            TableFormat::Json => serde_json::from_str(content)?,
            TableFormat::Toml => toml::from_str(content)?,
        };
        Ok(table)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, TableFormat::Json)
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content, TableFormat::from_path(path))?;
        tracing::info!(
            path = %path.display(),
            versions = table.all_versions.len(),
            exceptions = table.not_compatible.len(),
            "loaded compatibility table"
        );
        Ok(table)
    }

    /// Number of individual directives across all versions.
    pub fn directive_count(&self) -> usize {
        self.not_compatible.values().map(Vec::len).sum()
    }
}
