//! Read-compatibility check plan.
//!
//! Walks the matrix and classifies every ordered (reader, writer) pair as a
//! self-check, an upgrade (reader newer than writer) or a downgrade (reader
//! older than writer), then renders the shell invocation that exercises it.
//! Output shape:
//! ```text
//! check v1 can read it's own data ./redpanda-v1 --read-corpus corpus/v1
//! check  DOWNGRADE   compat between v1 and v2: ./redpanda-v1 --read-corpus corpus/v2
//!
//! check  UPGRADE     compat between v2 and v1: ./redpanda-v2 --read-corpus corpus/v1
//! check v2 can read it's own data ./redpanda-v2 --read-corpus corpus/v2
//! ```

use std::cmp::Ordering;
use std::fmt::Write as _;

use serde::Serialize;

use crate::matrix::CompatMatrix;

/// Direction of a compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Reader and writer are the same version.
    #[serde(rename = "self")]
    SelfCheck,
    /// Reader is newer than writer.
    Upgrade,
    /// Reader is older than writer.
    Downgrade,
}

impl CheckKind {
    /// Classify by list position.
    pub fn classify(reader: usize, writer: usize) -> Self {
        match writer.cmp(&reader) {
            Ordering::Less => CheckKind::Upgrade,
            Ordering::Greater => CheckKind::Downgrade,
            Ordering::Equal => CheckKind::SelfCheck,
        }
    }
}

/// Where the version binaries and data corpora live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Prefixed to the reader version to form the binary path.
    pub binary_prefix: String,
    /// Directory holding one corpus subdirectory per version.
    pub corpus_dir: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            binary_prefix: "./redpanda-".to_string(),
            corpus_dir: "corpus".to_string(),
        }
    }
}

impl ReportOptions {
    /// Command that makes `reader` read the corpus written by `writer`.
    pub fn command(&self, reader: &str, writer: &str) -> String {
        format!(
            "{}{reader} --read-corpus {}/{writer}",
            self.binary_prefix, self.corpus_dir
        )
    }
}

/// One classified (reader, writer) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub reader: String,
    pub writer: String,
    pub kind: CheckKind,
    pub compatible: bool,
    /// Invocation that exercises this pair.
    pub command: String,
}

impl Check {
    /// Human-readable plan line.
    pub fn line(&self) -> String {
        let (reader, writer, command) = (&self.reader, &self.writer, &self.command);
        match (self.kind, self.compatible) {
            (CheckKind::Upgrade, true) => {
                format!("check  UPGRADE     compat between {reader} and {writer}: {command}")
            }
            (CheckKind::Downgrade, true) => {
                format!("check  DOWNGRADE   compat between {reader} and {writer}: {command}")
            }
            (CheckKind::SelfCheck, true) => {
                format!("check {reader} can read it's own data {command}")
            }
            (CheckKind::Upgrade, false) => {
                format!("check  UPGRADE   INcompat between {reader} and {writer}: check-throw {command}")
            }
            (CheckKind::Downgrade, false) => {
                format!("check  DOWNGRADE INcompat between {reader} and {writer}: check-throw {command}")
            }
            (CheckKind::SelfCheck, false) => "not self-compatible?!".to_string(),
        }
    }
}

/// Every check in the matrix, grouped by reader row.
pub fn checks(matrix: &CompatMatrix, opts: &ReportOptions) -> Vec<Vec<Check>> {
    let versions = matrix.versions();
    versions
        .iter()
        .enumerate()
        .map(|(i, reader)| {
            versions
                .iter()
                .enumerate()
                .map(|(j, writer)| Check {
                    reader: reader.to_string(),
                    writer: writer.to_string(),
                    kind: CheckKind::classify(i, j),
                    compatible: matrix.get(i, j).unwrap_or(false),
                    command: opts.command(reader, writer),
                })
                .collect()
        })
        .collect()
}

/// Render the full plan: one line per pair, a blank line after each row.
pub fn render_plan(matrix: &CompatMatrix, opts: &ReportOptions) -> String {
    let mut out = String::new();
    for row in checks(matrix, opts) {
        for check in &row {
            out.push_str(&check.line());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Placeholder announcements for fetching each version and its corpus.
pub fn render_fetch_plan(matrix: &CompatMatrix) -> String {
    let mut out = String::new();
    for version in matrix.versions().iter() {
        let _ = writeln!(out, "downloading version  {version} ...");
        let _ = writeln!(out, "downloading corpus for version {version} ...");
    }
    out
}

/// Render the matrix as an aligned grid, readers down, writers across.
pub fn render_grid(matrix: &CompatMatrix) -> String {
    let versions = matrix.versions();
    let width = versions.iter().map(|v| v.chars().count()).max().unwrap_or(0);

    let mut out = " ".repeat(width);
    for writer in versions.iter() {
        let _ = write!(out, "  {writer:^width$}");
    }
    out.push('\n');

    for (i, reader) in versions.iter().enumerate() {
        let _ = write!(out, "{reader:<width$}");
        for j in 0..versions.len() {
            let mark = if matrix.get(i, j).unwrap_or(false) { "✓" } else { "✗" };
            let _ = write!(out, "  {mark:^width$}");
        }
        out.push('\n');
    }
    out
}
