//! Dialect configuration.
//!
//! Configuration is read once at startup and then shared read-only. All
//! validation happens here, so an unknown storage kind fails the load rather
//! than a later CREATE TABLE.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SchemaError};
use crate::policy::DefaultSkipPolicy;
use crate::storage::{StorageConfig, StorageKind};

/// On-disk configuration, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    default_model_store: Option<String>,
    #[serde(default)]
    model_store: HashMap<String, String>,
    #[serde(default)]
    lob_types: Option<Vec<String>>,
}

/// Validated configuration for [`HanaDialect`](crate::dialect::HanaDialect).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialectConfig {
    /// Storage-kind default and per-model overrides.
    pub storage: StorageConfig,
    /// Types for which DEFAULT clauses are suppressed.
    pub skip_policy: DefaultSkipPolicy,
}

impl DialectConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let default_kind = match raw.default_model_store {
            Some(value) => parse_kind("default_model_store", &value)?,
            None => StorageKind::default(),
        };

        let mut storage = StorageConfig::new(default_kind);
        for (model, value) in raw.model_store {
            let kind = parse_kind(&model, &value)?;
            storage = storage.with_override(model, kind);
        }

        let skip_policy = raw
            .lob_types
            .map_or_else(DefaultSkipPolicy::default, DefaultSkipPolicy::new);

        Ok(Self {
            storage,
            skip_policy,
        })
    }

    /// Replaces the process-wide default storage kind.
    #[must_use]
    pub fn with_default_store(mut self, kind: StorageKind) -> Self {
        self.storage = self.storage.with_default(kind);
        self
    }
}

fn parse_kind(key: &str, value: &str) -> Result<StorageKind> {
    value
        .parse()
        .map_err(|_| SchemaError::UnknownStorageKind {
            key: key.to_string(),
            value: value.to_string(),
        })
}
