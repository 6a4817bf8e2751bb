//! `compat-check plan` — print the read-compatibility check plan.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use compat_matrix::{checks, render_fetch_plan, render_plan, Check, CompatMatrix, ReportOptions};
use serde::Serialize;

use super::{resolve_format, OutputFormat};
use crate::config::load_matrix;

/// JSON shape of a plan.
#[derive(Debug, Serialize)]
struct PlanDocument<'a> {
    versions: &'a [String],
    checks: Vec<Check>,
}

/// Render the plan for an already built matrix.
pub fn render(
    matrix: &CompatMatrix,
    opts: &ReportOptions,
    fetch: bool,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            if fetch {
                out.push_str(&render_fetch_plan(matrix));
            }
            out.push_str(&render_plan(matrix, opts));
            Ok(out)
        }
        OutputFormat::Json => {
            let doc = PlanDocument {
                versions: matrix.versions().as_slice(),
                checks: checks(matrix, opts).into_iter().flatten().collect(),
            };
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Load the table at `table_path` and write its plan to `out`.
///
/// Nothing is written unless the whole table is valid.
pub fn write_plan<W: Write>(
    out: &mut W,
    table_path: &Path,
    opts: &ReportOptions,
    fetch: bool,
    format: Option<&str>,
) -> Result<()> {
    let format = resolve_format(format)?;
    let (_, matrix) = load_matrix(table_path)?;
    let rendered = render(&matrix, opts, fetch, format)?;
    tracing::debug!(bytes = rendered.len(), "rendered plan");
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Load the table at `table_path` and print its plan.
pub fn run(table_path: &Path, opts: &ReportOptions, fetch: bool, format: Option<&str>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_plan(&mut handle, table_path, opts, fetch, format)?;
    handle.flush()?;
    Ok(())
}
