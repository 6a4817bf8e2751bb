//! `compat-check validate` — check a table without printing a plan.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use compat_matrix::{CompatMatrix, CompatTable};

use crate::config::load_matrix;

/// Summarize a loaded table.
pub fn summary(table: &CompatTable, matrix: &CompatMatrix) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Versions:            {}", matrix.len());
    let _ = writeln!(
        out,
        "Rows with exceptions: {} ({} directives)",
        table.not_compatible.len(),
        table.directive_count()
    );
    let _ = writeln!(out, "Incompatible pairs:  {}", matrix.incompatible_pairs());

    let self_incompatible = matrix.self_incompatible();
    if self_incompatible.is_empty() {
        out.push_str("Self-compatibility:  ok\n");
    } else {
        out.push_str("Self-compatibility:  FAILED\n");
        for idx in self_incompatible {
            let name = matrix.versions().name(idx).unwrap_or_default();
            let _ = writeln!(out, "  {name} cannot read its own data");
        }
    }
    out
}

pub fn run(table_path: &Path) -> Result<()> {
    let (table, matrix) = load_matrix(table_path)?;
    println!("Table: {}", table_path.display());
    print!("{}", summary(&table, &matrix));
    Ok(())
}
