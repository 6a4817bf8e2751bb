//! Compatibility table discovery and loading.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use compat_matrix::{CompatMatrix, CompatTable};

/// File names searched for, in order, in each directory.
pub const TABLE_FILE_NAMES: &[&str] = &["rpc_compat.json", "rpc_compat.toml"];

/// Search upward from `start_dir` for a compatibility table file.
pub fn find_table(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        for name in TABLE_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Resolve the table path: an explicit `--config` wins, otherwise search
/// upward from `cwd`.
pub fn resolve_table_path(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("compatibility table not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }
    match find_table(cwd) {
        Some(path) => Ok(path),
        None => bail!(
            "no {} found in {} or any parent directory (use --config)",
            TABLE_FILE_NAMES.join(" or "),
            cwd.display()
        ),
    }
}

/// Load the table and build its matrix.
///
/// Any configuration error surfaces here, before a command prints anything.
pub fn load_matrix(path: &Path) -> Result<(CompatTable, CompatMatrix)> {
    let table = CompatTable::load(path).with_context(|| format!("loading {}", path.display()))?;
    let matrix =
        CompatMatrix::build(&table).with_context(|| format!("invalid table {}", path.display()))?;
    Ok((table, matrix))
}
