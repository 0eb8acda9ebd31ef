//! Schema-change to SQL translation for SAP HANA.
//!
//! `hana-schema` turns database-agnostic schema operations into HANA DDL:
//! - Every operation maps onto one fixed statement template
//! - New tables are created as ROW or COLUMN tables, per model
//! - Large-object columns (NCLOB, BLOB, CLOB) never receive a DEFAULT clause
//!
//! # Architecture
//!
//! - **Literals** - Rendering of default values and other literal operands
//! - **Templates** - The fixed statement templates of the dialect
//! - **Dialect** - Dispatches operations onto templates and policies
//! - **Editor** - Hands generated SQL to a caller-supplied executor
//!
//! Identifiers are passed through unchanged; quoting them is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use hana_schema::prelude::*;
//!
//! let dialect = HanaDialect::new(DialectConfig {
//!     storage: StorageConfig::new(StorageKind::Column).with_override("Session", StorageKind::Row),
//!     ..DialectConfig::default()
//! });
//!
//! let op = OperationDescriptor::create_model_table(
//!     "Session",
//!     "auth_session",
//!     vec![ColumnDefinition::new("session_key", "NVARCHAR(40)").primary_key()],
//! );
//! let statement = dialect.generate_sql(&op)?;
//! assert_eq!(
//!     statement.sql(),
//!     "CREATE ROW TABLE auth_session (session_key NVARCHAR(40) NOT NULL PRIMARY KEY)"
//! );
//! # Ok::<(), hana_schema::error::SchemaError>(())
//! ```

pub mod config;
pub mod dialect;
pub mod editor;
pub mod error;
pub mod literal;
pub mod operations;
pub mod policy;
pub mod statement;
pub mod storage;
pub mod templates;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::DialectConfig;
    pub use crate::dialect::{HanaDialect, SchemaDialect};
    pub use crate::editor::{SchemaEditor, SqlExecutor};
    pub use crate::error::{Result, SchemaError};
    pub use crate::literal::{DefaultValue, LiteralValue, Number, Temporal};
    pub use crate::operations::{ColumnDefinition, OperationDescriptor, OperationKind};
    pub use crate::policy::DefaultSkipPolicy;
    pub use crate::statement::SqlStatement;
    pub use crate::storage::{StorageConfig, StorageKind};
}
