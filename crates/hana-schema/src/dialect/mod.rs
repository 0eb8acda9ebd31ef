//! Database dialect implementations.
//!
//! A dialect turns [`OperationDescriptor`]s into SQL text for one database
//! system. It never executes anything.

mod hana;

pub use hana::HanaDialect;

use crate::error::Result;
use crate::literal::LiteralValue;
use crate::operations::OperationDescriptor;
use crate::statement::SqlStatement;

/// Trait for database-specific DDL generation.
pub trait SchemaDialect: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Generates SQL for a schema operation.
    fn generate_sql(&self, operation: &OperationDescriptor) -> Result<SqlStatement>;

    /// Renders a literal value.
    fn quote_value(&self, value: &LiteralValue) -> String {
        value.to_sql()
    }

    /// Returns whether DEFAULT clauses must be left out for this column type.
    fn skip_default(&self, sql_type: Option<&str>) -> bool;
}
