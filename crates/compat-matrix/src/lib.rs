//! Version read-compatibility matrix and check planning.
//!
//! A compatibility table lists releases in chronological order together with
//! sparse exception directives. This crate turns that table into a full
//! N×N matrix of "can version *i* read data written by version *j*" verdicts
//! and renders the upgrade/downgrade checks that exercise each pair.
//!
//! # Pipeline
//!
//! - [`CompatTable`]: the raw JSON/TOML document
//! - [`CompatMatrix::build`]: validates versions and applies [`Directive`]s
//! - [`report`]: classifies pairs and renders plan lines

pub mod directive;
pub mod error;
pub mod matrix;
pub mod report;
pub mod table;
pub mod versions;

// Re-exports for convenience.
pub use directive::Directive;
pub use error::{CompatError, Result};
pub use matrix::{CompatMatrix, MatrixSnapshot};
pub use report::{
    checks, render_fetch_plan, render_grid, render_plan, Check, CheckKind, ReportOptions,
};
pub use table::{CompatTable, TableFormat};
pub use versions::VersionList;
