//! Error types for DDL generation.

/// Errors that can occur while translating schema operations into SQL.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// An operation is missing a value its template requires.
    #[error("Operation '{operation}' is missing required field '{field}'")]
    Precondition {
        /// Operation kind (e.g. "AddColumn").
        operation: &'static str,
        /// Name of the missing or empty field.
        field: String,
    },

    /// A value cannot be rendered as a SQL literal.
    #[error("Unsupported literal kind: {0}")]
    UnsupportedLiteralKind(String),

    /// A configured storage kind is neither ROW nor COLUMN.
    #[error("Unknown storage kind '{value}' for '{key}'")]
    UnknownStorageKind {
        /// Model name, or `default_model_store` for the process-wide default.
        key: String,
        /// The unrecognized value.
        value: String,
    },

    /// IO error (reading configuration or operation files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The external executor rejected a statement.
    #[error("Failed to execute '{sql}': {source}")]
    Execution {
        /// The statement that failed.
        sql: String,
        /// Error reported by the executor.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SchemaError {
    pub(crate) fn precondition(operation: &'static str, field: impl Into<String>) -> Self {
        Self::Precondition {
            operation,
            field: field.into(),
        }
    }
}

/// Result type for DDL generation.
pub type Result<T> = std::result::Result<T, SchemaError>;
