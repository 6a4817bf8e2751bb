//! Pairwise read-compatibility matrix.
//!
//! Row `i`, column `j` answers "can version `i` read data written by version
//! `j`?". The matrix starts fully compatible and each version's directives
//! carve exclusions out of (and add exceptions back into) its own row.

use serde::Serialize;

use crate::directive::Directive;
use crate::error::Result;
use crate::table::CompatTable;
use crate::versions::VersionList;

/// A fully built, immutable compatibility matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatMatrix {
    versions: VersionList,
    cells: Vec<Vec<bool>>,
}

/// Serializable snapshot of a matrix.
#[derive(Debug, Serialize)]
pub struct MatrixSnapshot<'a> {
    pub versions: &'a [String],
    pub cells: &'a [Vec<bool>],
}

impl CompatMatrix {
    /// Build the matrix for `table`.
    ///
    /// Every directive is parsed and resolved before the matrix is returned,
    /// so a malformed table never yields a partial result.
    pub fn build(table: &CompatTable) -> Result<Self> {
        let versions = VersionList::new(table.all_versions.clone())?;
        let n = versions.len();
        let mut cells = vec![vec![true; n]; n];

        for (subject, directives) in &table.not_compatible {
            let row_idx = versions.index_of(subject, || "not_compatible key".to_string())?;
            let row = &mut cells[row_idx];
            for raw in directives {
                Directive::parse(subject, raw)?.apply(row, &versions, subject)?;
            }
        }

        let matrix = Self { versions, cells };
        for idx in matrix.self_incompatible() {
            tracing::warn!(
                version = matrix.versions.name(idx).unwrap_or_default(),
                "version is marked unable to read its own data"
            );
        }
        Ok(matrix)
    }

    /// Parse, validate and build from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::build(&CompatTable::from_json(content)?)
    }

    pub fn versions(&self) -> &VersionList {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `reader` (row) can read data written by `writer` (column).
    ///
    /// Returns `None` when either index is out of range.
    pub fn get(&self, reader: usize, writer: usize) -> Option<bool> {
        self.cells.get(reader)?.get(writer).copied()
    }

    pub fn row(&self, reader: usize) -> Option<&[bool]> {
        self.cells.get(reader).map(Vec::as_slice)
    }

    /// Name-based lookup; `None` if either version is unknown.
    pub fn is_compatible(&self, reader: &str, writer: &str) -> Option<bool> {
        let r = self.versions.position(reader)?;
        let w = self.versions.position(writer)?;
        self.get(r, w)
    }

    /// Indices of versions whose diagonal cell is `false`.
    ///
    /// `>X` on the row of any version later than `X` excludes that version's
    /// own column unless a later `+` re-includes it.
    pub fn self_incompatible(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| !self.cells[i][i]).collect()
    }

    /// Number of `false` cells off the diagonal.
    pub fn incompatible_pairs(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().enumerate().filter(|&(j, &c)| i != j && !c).count())
            .sum()
    }

    pub fn snapshot(&self) -> MatrixSnapshot<'_> {
        MatrixSnapshot {
            versions: self.versions.as_slice(),
            cells: &self.cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompatError;

    fn table(versions: &[&str], exceptions: &[(&str, &[&str])]) -> CompatTable {
        CompatTable {
            all_versions: versions.iter().map(|s| s.to_string()).collect(),
            not_compatible: exceptions
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    #[test]
    fn no_exceptions_is_fully_compatible() {
        let m = CompatMatrix::build(&table(&["a", "b", "c"], &[])).unwrap();
        for i in 0..3 {
            assert_eq!(m.row(i).unwrap(), &[true, true, true]);
        }
        assert_eq!(m.incompatible_pairs(), 0);
        assert!(m.self_incompatible().is_empty());
    }

    #[test]
    fn later_include_overrides_exclusion() {
        let m = CompatMatrix::build(&table(
            &["v1", "v2", "v3", "v4"],
            &[("v1", &[">v1", "+v3"])],
        ))
        .unwrap();
        assert_eq!(m.row(0).unwrap(), &[true, false, true, false]);
    }

    #[test]
    fn later_exclusion_overrides_include() {
        let m = CompatMatrix::build(&table(
            &["v1", "v2", "v3", "v4"],
            &[("v1", &["+v3", ">v1"])],
        ))
        .unwrap();
        assert_eq!(m.row(0).unwrap(), &[true, false, false, false]);
    }

    #[test]
    fn include_after_own_exclusion_keeps_target() {
        let m = CompatMatrix::build(&table(&["v1", "v2", "v3"], &[("v3", &[">v2", "+v2"])])).unwrap();
        assert_eq!(m.is_compatible("v3", "v2"), Some(true));
    }

    #[test]
    fn exclusions_touch_only_their_row() {
        let m = CompatMatrix::build(&table(&["a", "b", "c"], &[("b", &["<c"])])).unwrap();
        assert_eq!(m.row(0).unwrap(), &[true, true, true]);
        assert_eq!(m.row(1).unwrap(), &[false, false, true]);
        assert_eq!(m.row(2).unwrap(), &[true, true, true]);
        assert_eq!(m.self_incompatible(), vec![1]);
        assert_eq!(m.incompatible_pairs(), 1);
    }

    #[test]
    fn after_earlier_version_excludes_own_diagonal() {
        let m = CompatMatrix::build(&table(&["v1", "v2", "v3"], &[("v3", &[">v1"])])).unwrap();
        assert_eq!(m.get(2, 2), Some(false));
        assert_eq!(m.self_incompatible(), vec![2]);
    }

    #[test]
    fn unknown_subject_rejected() {
        let err = CompatMatrix::build(&table(&["a"], &[("zz", &[">a"])])).unwrap_err();
        assert!(matches!(err, CompatError::VersionNotFound { ref version, .. } if version == "zz"));
    }

    #[test]
    fn unknown_target_rejected() {
        let err = CompatMatrix::build(&table(&["a", "b"], &[("a", &["<b", "+nope"])])).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn invalid_indicator_rejected() {
        let err = CompatMatrix::build(&table(&["a", "b"], &[("a", &["!b"])])).unwrap_err();
        assert!(matches!(err, CompatError::InvalidDirective { .. }));
    }

    #[test]
    fn duplicate_versions_rejected() {
        let err = CompatMatrix::build(&table(&["a", "b", "b"], &[])).unwrap_err();
        assert!(matches!(err, CompatError::DuplicateVersion { .. }));
    }

    #[test]
    fn empty_table_builds_empty_matrix() {
        let m = CompatMatrix::build(&CompatTable::default()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let m = CompatMatrix::build(&table(&["a"], &[])).unwrap();
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.is_compatible("a", "b"), None);
    }

    #[test]
    fn snapshot_serializes() {
        let m = CompatMatrix::from_json(
            r#"{ "all_versions": ["a", "b"], "not_compatible": { "a": [">a"] } }"#,
        )
        .unwrap();
        let json = serde_json::to_value(m.snapshot()).unwrap();
        assert_eq!(json["versions"], serde_json::json!(["a", "b"]));
        assert_eq!(json["cells"], serde_json::json!([[true, false], [true, true]]));
    }
}
