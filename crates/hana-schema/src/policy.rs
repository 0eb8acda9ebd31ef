//! Default-value suppression for large-object columns.

use std::collections::BTreeSet;

/// Type names that reject a DEFAULT clause unless configured otherwise.
pub const DEFAULT_LOB_TYPES: &[&str] = &["NCLOB", "BLOB", "CLOB"];

/// Decides whether a column's default may be rendered as SQL.
///
/// Large-object columns reject `DEFAULT` outright, so for those types the
/// clause is left out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSkipPolicy {
    lob_types: BTreeSet<String>,
}

impl Default for DefaultSkipPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOB_TYPES.iter().copied())
    }
}

impl DefaultSkipPolicy {
    /// Creates a policy skipping defaults for the given type names.
    pub fn new<I, S>(lob_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lob_types: lob_types
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Returns the (upper-cased) type names this policy skips.
    pub fn lob_types(&self) -> impl Iterator<Item = &str> {
        self.lob_types.iter().map(String::as_str)
    }

    /// Returns true if no DEFAULT clause may be rendered for `sql_type`.
    ///
    /// Unknown or absent types always render.
    #[must_use]
    pub fn skip(&self, sql_type: Option<&str>) -> bool {
        sql_type.is_some_and(|t| self.lob_types.contains(&t.trim().to_ascii_uppercase()))
    }
}
