//! Schema editor.
//!
//! Feeds the SQL a dialect generates into a caller-supplied executor. The
//! editor owns no connection; transactions and connection lifecycle stay with
//! the executor.

use tracing::{debug, info};

use crate::dialect::SchemaDialect;
use crate::error::{Result, SchemaError};
use crate::operations::OperationDescriptor;

/// Something that can run a single SQL statement.
pub trait SqlExecutor {
    /// Error reported when a statement fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes one statement.
    fn execute(&mut self, sql: &str) -> std::result::Result<(), Self::Error>;
}

/// Collects statements in memory instead of running them.
impl SqlExecutor for Vec<String> {
    type Error = std::convert::Infallible;

    fn execute(&mut self, sql: &str) -> std::result::Result<(), Self::Error> {
        self.push(sql.to_string());
        Ok(())
    }
}

/// Applies schema operations through a dialect and an executor.
pub struct SchemaEditor<D: SchemaDialect, E: SqlExecutor> {
    dialect: D,
    executor: E,
    collect_sql: bool,
    collected: Vec<String>,
}

impl<D: SchemaDialect, E: SqlExecutor> SchemaEditor<D, E> {
    /// Creates a new schema editor.
    pub const fn new(dialect: D, executor: E) -> Self {
        Self {
            dialect,
            executor,
            collect_sql: false,
            collected: Vec::new(),
        }
    }

    /// Enables collect-only mode (SQL is recorded but not executed).
    #[must_use]
    pub fn collect_sql(mut self, enabled: bool) -> Self {
        self.collect_sql = enabled;
        self
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Returns the statements recorded in collect-only mode.
    #[must_use]
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    /// Consumes the editor and returns its executor.
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Applies a single operation.
    ///
    /// SQL for the operation is generated completely before the first
    /// statement runs, so an invalid operation executes nothing.
    pub fn apply(&mut self, operation: &OperationDescriptor) -> Result<()> {
        info!(
            dialect = self.dialect.name(),
            operation = %operation.description(),
            "Applying schema operation"
        );

        let statement = self.dialect.generate_sql(operation)?;
        for sql in statement.into_statements() {
            debug!(sql = %sql, "Executing SQL");

            if self.collect_sql {
                self.collected.push(sql);
            } else {
                self.executor
                    .execute(&sql)
                    .map_err(|e| SchemaError::Execution {
                        sql: sql.clone(),
                        source: Box::new(e),
                    })?;
            }
        }

        Ok(())
    }

    /// Applies operations in order, stopping at the first failure.
    pub fn apply_all<'a, I>(&mut self, operations: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a OperationDescriptor>,
    {
        for operation in operations {
            self.apply(operation)?;
        }
        Ok(())
    }
}
