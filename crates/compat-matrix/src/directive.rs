//! Compatibility exception directives.
//!
//! A directive is a single-character indicator followed by a version name:
//!
//! ```text
//! >v22.1   incompatible with everything released after v22.1
//! <v22.1   incompatible with everything released before v22.1
//! +v21.3   compatible with v21.3, overriding earlier exclusions
//! ```
//!
//! The named version itself is never excluded by `>` or `<`.

use std::fmt;

use crate::error::{CompatError, Result};
use crate::versions::VersionList;

/// A parsed exception directive for one version's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `>X`: exclude every version after `X`.
    After(String),
    /// `<X`: exclude every version before `X`.
    Before(String),
    /// `+X`: re-include exactly `X`.
    Include(String),
}

impl Directive {
    /// Parse a raw directive string listed under `subject`.
    ///
    /// The indicator must be the first character; whitespace around the
    /// version name is trimmed.
    pub fn parse(subject: &str, raw: &str) -> Result<Self> {
        let mut chars = raw.chars();
        let indicator = chars.next();
        let target = chars.as_str().trim().to_string();
        match indicator {
            Some('>') => Ok(Directive::After(target)),
            Some('<') => Ok(Directive::Before(target)),
            Some('+') => Ok(Directive::Include(target)),
            _ => Err(CompatError::InvalidDirective {
                version: subject.to_string(),
                directive: raw.to_string(),
            }),
        }
    }

    /// The version name this directive refers to.
    pub fn target(&self) -> &str {
        match self {
            Directive::After(t) | Directive::Before(t) | Directive::Include(t) => t,
        }
    }

    /// Apply this directive to `row`, the compatibility row of `subject`.
    pub fn apply(&self, row: &mut [bool], versions: &VersionList, subject: &str) -> Result<()> {
        let idx = versions.index_of(self.target(), || {
            format!("directive '{self}' of version '{subject}'")
        })?;
        match self {
            Directive::After(_) => {
                for cell in row.iter_mut().skip(idx + 1) {
                    *cell = false;
                }
            }
            Directive::Before(_) => {
                for cell in row.iter_mut().take(idx) {
                    *cell = false;
                }
            }
            Directive::Include(_) => {
                row[idx] = true;
            }
        }
        tracing::debug!(version = subject, directive = %self, "applied directive");
        Ok(())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::After(t) => write!(f, ">{t}"),
            Directive::Before(t) => write!(f, "<{t}"),
            Directive::Include(t) => write!(f, "+{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(n: usize) -> VersionList {
        VersionList::new((1..=n).map(|i| format!("v{i}")).collect()).unwrap()
    }

    #[test]
    fn parse_indicators() {
        assert_eq!(
            Directive::parse("v1", ">v2").unwrap(),
            Directive::After("v2".into())
        );
        assert_eq!(
            Directive::parse("v1", "<v2").unwrap(),
            Directive::Before("v2".into())
        );
        assert_eq!(
            Directive::parse("v1", "+v2").unwrap(),
            Directive::Include("v2".into())
        );
    }

    #[test]
    fn parse_trims_target() {
        let d = Directive::parse("v1", ">  v22.3.1 ").unwrap();
        assert_eq!(d.target(), "v22.3.1");
        assert_eq!(d.to_string(), ">v22.3.1");
    }

    #[test]
    fn parse_rejects_unknown_indicator() {
        let err = Directive::parse("v1", "=v2").unwrap_err();
        assert!(matches!(
            err,
            CompatError::InvalidDirective { ref version, ref directive }
                if version == "v1" && directive == "=v2"
        ));
    }

    #[test]
    fn parse_rejects_empty_and_leading_space() {
        assert!(Directive::parse("v1", "").is_err());
        assert!(Directive::parse("v1", " >v2").is_err());
    }

    #[test]
    fn after_keeps_target_and_excludes_later() {
        let vs = versions(5);
        let mut row = vec![true; 5];
        Directive::After("v2".into()).apply(&mut row, &vs, "v4").unwrap();
        assert_eq!(row, vec![true, true, false, false, false]);
    }

    #[test]
    fn after_last_version_excludes_nothing() {
        let vs = versions(3);
        let mut row = vec![true; 3];
        Directive::After("v3".into()).apply(&mut row, &vs, "v1").unwrap();
        assert_eq!(row, vec![true; 3]);
    }

    #[test]
    fn before_keeps_target_and_excludes_earlier() {
        let vs = versions(5);
        let mut row = vec![true; 5];
        Directive::Before("v3".into()).apply(&mut row, &vs, "v4").unwrap();
        assert_eq!(row, vec![false, false, true, true, true]);
    }

    #[test]
    fn before_first_version_excludes_nothing() {
        let vs = versions(3);
        let mut row = vec![true; 3];
        Directive::Before("v1".into()).apply(&mut row, &vs, "v2").unwrap();
        assert_eq!(row, vec![true; 3]);
    }

    #[test]
    fn include_sets_single_cell() {
        let vs = versions(3);
        let mut row = vec![false; 3];
        Directive::Include("v2".into()).apply(&mut row, &vs, "v3").unwrap();
        assert_eq!(row, vec![false, true, false]);
    }

    #[test]
    fn unknown_target_is_an_error() {
        let vs = versions(2);
        let mut row = vec![true; 2];
        let err = Directive::After("v9".into())
            .apply(&mut row, &vs, "v1")
            .unwrap_err();
        assert!(matches!(err, CompatError::VersionNotFound { ref version, .. } if version == "v9"));
        assert_eq!(row, vec![true; 2]);
    }
}
