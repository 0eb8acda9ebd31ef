//! Table storage organization.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Physical organization of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageKind {
    /// Row store.
    Row,
    /// Column store.
    #[default]
    Column,
}

impl StorageKind {
    /// Returns the keyword used in `CREATE <kind> TABLE`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Row => "ROW",
            Self::Column => "COLUMN",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when a storage kind name is neither ROW nor COLUMN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected ROW or COLUMN, got '{0}'")]
pub struct ParseStorageKindError(pub String);

impl FromStr for StorageKind {
    type Err = ParseStorageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ROW" => Ok(Self::Row),
            "COLUMN" => Ok(Self::Column),
            _ => Err(ParseStorageKindError(s.to_string())),
        }
    }
}

/// Resolves the storage kind of newly created tables.
///
/// Per-model overrides win over the process-wide default. The mapping is
/// read-only once built, so a shared reference can serve concurrent callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    default_kind: StorageKind,
    overrides: HashMap<String, StorageKind>,
}

impl StorageConfig {
    /// Creates a config with the given default and no overrides.
    #[must_use]
    pub fn new(default_kind: StorageKind) -> Self {
        Self {
            default_kind,
            overrides: HashMap::new(),
        }
    }

    /// Adds a per-model override.
    #[must_use]
    pub fn with_override(mut self, model: impl Into<String>, kind: StorageKind) -> Self {
        self.overrides.insert(model.into(), kind);
        self
    }

    /// Replaces the process-wide default.
    #[must_use]
    pub const fn with_default(mut self, default_kind: StorageKind) -> Self {
        self.default_kind = default_kind;
        self
    }

    /// Returns the process-wide default.
    #[must_use]
    pub const fn default_kind(&self) -> StorageKind {
        self.default_kind
    }

    /// Returns the per-model overrides.
    #[must_use]
    pub const fn overrides(&self) -> &HashMap<String, StorageKind> {
        &self.overrides
    }

    /// Returns the storage kind for a model.
    #[must_use]
    pub fn resolve(&self, model: &str) -> StorageKind {
        self.overrides
            .get(model)
            .copied()
            .unwrap_or(self.default_kind)
    }
}
