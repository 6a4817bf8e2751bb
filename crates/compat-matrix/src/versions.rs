//! Ordered version list with positional lookup.
//!
//! Position is meaningful: a version at a higher index is a later release.
//! Upgrade and downgrade checks are derived purely from index comparison, so
//! callers must supply the list in chronological release order. Nothing here
//! can verify that, since version identifiers are opaque strings.

use std::collections::HashMap;

use crate::error::{CompatError, Result};

/// An ordered, duplicate-free list of version identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl VersionList {
    /// Build a list from versions in chronological order.
    ///
    /// Fails with [`CompatError::DuplicateVersion`] if any identifier repeats,
    /// since lookup by name would otherwise be ambiguous.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if let Some(&first) = positions.get(name) {
                return Err(CompatError::DuplicateVersion {
                    version: name.clone(),
                    first,
                    second: idx,
                });
            }
            positions.insert(name.clone(), idx);
        }
        Ok(Self { names, positions })
    }

    /// Position of `name` in the list, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of `name`, or a `VersionNotFound` error naming `context`.
    pub fn index_of(&self, name: &str, context: impl FnOnce() -> String) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| CompatError::VersionNotFound {
                version: name.to_string(),
                context: context(),
            })
    }

    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}
