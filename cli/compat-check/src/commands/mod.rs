//! CLI command implementations.

pub mod matrix;
pub mod plan;
pub mod validate;

use anyhow::{bail, Result};

/// Output format shared by `plan` and `matrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve a `--format` flag (default: text).
pub fn resolve_format(name: Option<&str>) -> Result<OutputFormat> {
    match name {
        None | Some("text") => Ok(OutputFormat::Text),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => bail!("unknown format: '{other}'. Available: text, json"),
    }
}
