//! `compat-check matrix` — show the compatibility grid.

use std::path::Path;

use anyhow::Result;
use compat_matrix::{render_grid, CompatMatrix};

use super::{resolve_format, OutputFormat};
use crate::config::load_matrix;

pub fn render(matrix: &CompatMatrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_grid(matrix)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&matrix.snapshot())?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Load the table at `table_path` and print its matrix.
pub fn run(table_path: &Path, format: Option<&str>) -> Result<()> {
    let format = resolve_format(format)?;
    let (_, matrix) = load_matrix(table_path)?;
    print!("{}", render(&matrix, format)?);
    Ok(())
}
