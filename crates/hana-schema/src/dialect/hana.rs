//! SAP HANA dialect.
//!
//! HANA differs from most engines in two places that matter for DDL:
//! tables are created as either ROW or COLUMN tables, and large-object
//! columns (NCLOB, BLOB, CLOB) reject DEFAULT clauses.

use tracing::debug;

use crate::config::DialectConfig;
use crate::error::Result;
use crate::literal::DefaultValue;
use crate::operations::{ColumnDefinition, OperationDescriptor, OperationKind};
use crate::statement::SqlStatement;
use crate::storage::StorageKind;
use crate::templates::{self, CREATE_TABLE_UNIQUE, UPDATE_WITH_DEFAULT, template};

use super::SchemaDialect;

/// SAP HANA DDL dialect.
#[derive(Debug, Clone, Default)]
pub struct HanaDialect {
    config: DialectConfig,
}

impl HanaDialect {
    /// Creates a new HANA dialect.
    #[must_use]
    pub const fn new(config: DialectConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Returns the storage kind a new table for `model` gets.
    #[must_use]
    pub fn storage_kind(&self, model: &str) -> StorageKind {
        self.config.storage.resolve(model)
    }

    fn render_default(&self, default: &DefaultValue) -> String {
        match default {
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::Value(value) => self.quote_value(value),
        }
    }

    /// Generates the column definition that follows the column name.
    ///
    /// The DEFAULT fragment is omitted for types the skip policy names.
    pub fn column_definition(&self, column: &ColumnDefinition) -> String {
        let mut parts = vec![column.sql_type.clone()];

        if let Some(default) = &column.default {
            if self.skip_default(Some(&column.sql_type)) {
                debug!(
                    column = %column.name,
                    sql_type = %column.sql_type,
                    "Omitting DEFAULT for large-object column"
                );
            } else {
                parts.push(format!("DEFAULT {}", self.render_default(default)));
            }
        }

        parts.push(if column.nullable { "NULL" } else { "NOT NULL" }.to_string());

        if column.primary_key {
            parts.push("PRIMARY KEY".to_string());
        } else if column.unique {
            parts.push("UNIQUE".to_string());
        }

        if let Some(ref check) = column.check {
            parts.push(format!("CHECK ({check})"));
        }

        parts.join(" ")
    }

    fn create_table_sql(
        &self,
        table: &str,
        model: Option<&str>,
        columns: &[ColumnDefinition],
        unique_together: &[Vec<String>],
    ) -> Result<String> {
        let op = OperationKind::CreateTable.name();
        let model = model.unwrap_or(table);
        let kind = self.storage_kind(model);
        debug!(table, model, storage = %kind, "Resolved table storage kind");

        let mut definitions: Vec<String> = columns
            .iter()
            .map(|c| format!("{} {}", c.name, self.column_definition(c)))
            .collect();
        for group in unique_together {
            definitions.push(templates::fill(
                CREATE_TABLE_UNIQUE,
                op,
                &[("columns", &group.join(", "))],
            )?);
        }

        templates::fill(
            &templates::create_table_template(kind),
            op,
            &[("table", table), ("definition", &definitions.join(", "))],
        )
    }

    fn add_column_sql(
        &self,
        table: &str,
        column: &ColumnDefinition,
        keep_default: bool,
    ) -> Result<SqlStatement> {
        let op = OperationKind::AddColumn.name();
        let sql = templates::fill(
            template(OperationKind::AddColumn),
            op,
            &[
                ("table", table),
                ("column", &column.name),
                ("definition", &self.column_definition(column)),
            ],
        )?;
        let mut statement = SqlStatement::new(sql);

        let Some(default) = &column.default else {
            return Ok(statement);
        };

        if self.skip_default(Some(&column.sql_type)) {
            // Existing rows still need the value the DEFAULT would have supplied.
            if !default.is_null() {
                statement = statement.then(templates::fill(
                    UPDATE_WITH_DEFAULT,
                    op,
                    &[
                        ("table", table),
                        ("column", &column.name),
                        ("default", &self.render_default(default)),
                    ],
                )?);
            }
        } else if !keep_default {
            statement = statement.then(templates::fill(
                template(OperationKind::DropColumnDefault),
                op,
                &[
                    ("table", table),
                    ("column", &column.name),
                    ("definition", &nullability_definition(column)),
                ],
            )?);
        }

        Ok(statement)
    }

    fn set_nullability_sql(
        &self,
        table: &str,
        column: &str,
        sql_type: &str,
        nullable: bool,
        backfill: Option<&DefaultValue>,
    ) -> Result<SqlStatement> {
        let op = OperationKind::SetColumnNullability.name();
        let alter = templates::fill(
            template(OperationKind::SetColumnNullability),
            op,
            &[
                ("table", table),
                ("column", column),
                ("type", sql_type),
                ("nullability", if nullable { "NULL" } else { "NOT NULL" }),
            ],
        )?;

        match backfill {
            Some(value) if !nullable && !value.is_null() => {
                let update = templates::fill(
                    UPDATE_WITH_DEFAULT,
                    op,
                    &[
                        ("table", table),
                        ("column", column),
                        ("default", &self.render_default(value)),
                    ],
                )?;
                Ok(SqlStatement::new(update).then(alter))
            }
            Some(_) => {
                debug!(table, column, "Ignoring backfill value");
                Ok(SqlStatement::new(alter))
            }
            None => Ok(SqlStatement::new(alter)),
        }
    }

    fn set_default_sql(
        &self,
        table: &str,
        column: &str,
        sql_type: &str,
        default: &DefaultValue,
    ) -> Result<String> {
        if self.skip_default(Some(sql_type)) {
            debug!(table, column, sql_type, "Omitting DEFAULT for large-object column");
            return self.drop_default_sql(table, column, sql_type, OperationKind::SetColumnDefault);
        }

        templates::fill(
            template(OperationKind::SetColumnDefault),
            OperationKind::SetColumnDefault.name(),
            &[
                ("table", table),
                ("column", column),
                ("definition", sql_type),
                ("default", &self.render_default(default)),
            ],
        )
    }

    fn drop_default_sql(
        &self,
        table: &str,
        column: &str,
        sql_type: &str,
        origin: OperationKind,
    ) -> Result<String> {
        templates::fill(
            template(OperationKind::DropColumnDefault),
            origin.name(),
            &[("table", table), ("column", column), ("definition", sql_type)],
        )
    }
}

/// Type plus nullability, without DEFAULT or key clauses.
fn nullability_definition(column: &ColumnDefinition) -> String {
    let null = if column.nullable { "NULL" } else { "NOT NULL" };
    format!("{} {null}", column.sql_type)
}

fn fill_simple(kind: OperationKind, params: &[(&str, &str)]) -> Result<SqlStatement> {
    templates::fill(template(kind), kind.name(), params).map(SqlStatement::new)
}

impl SchemaDialect for HanaDialect {
    fn name(&self) -> &'static str {
        "hana"
    }

    fn generate_sql(&self, operation: &OperationDescriptor) -> Result<SqlStatement> {
        operation.validate()?;
        let kind = operation.kind();

        match operation {
            OperationDescriptor::CreateTable {
                table,
                model,
                columns,
                unique_together,
            } => self
                .create_table_sql(table, model.as_deref(), columns, unique_together)
                .map(SqlStatement::new),

            OperationDescriptor::RenameTable {
                old_table,
                new_table,
            } => fill_simple(kind, &[("old_table", old_table), ("new_table", new_table)]),

            OperationDescriptor::RetablespaceTable {
                table,
                new_tablespace,
            } => fill_simple(
                kind,
                &[("table", table), ("new_tablespace", new_tablespace)],
            ),

            OperationDescriptor::AddColumn {
                table,
                column,
                keep_default,
            } => self.add_column_sql(table, column, *keep_default),

            OperationDescriptor::AlterColumnType {
                table,
                column,
                sql_type,
            } => fill_simple(
                kind,
                &[("table", table), ("column", column), ("type", sql_type)],
            ),

            OperationDescriptor::SetColumnNullability {
                table,
                column,
                sql_type,
                nullable,
                backfill,
            } => self.set_nullability_sql(table, column, sql_type, *nullable, backfill.as_ref()),

            OperationDescriptor::SetColumnDefault {
                table,
                column,
                sql_type,
                default,
            } => self
                .set_default_sql(table, column, sql_type, default)
                .map(SqlStatement::new),

            OperationDescriptor::DropColumnDefault {
                table,
                column,
                sql_type,
            } => self
                .drop_default_sql(table, column, sql_type, kind)
                .map(SqlStatement::new),

            OperationDescriptor::DropColumn { table, column } => {
                fill_simple(kind, &[("table", table), ("column", column)])
            }

            OperationDescriptor::RenameColumn {
                table,
                old_column,
                new_column,
            } => fill_simple(
                kind,
                &[
                    ("table", table),
                    ("old_column", old_column),
                    ("new_column", new_column),
                ],
            ),

            OperationDescriptor::CreateCheckConstraint { table, name, check } => fill_simple(
                kind,
                &[("table", table), ("name", name), ("check", check)],
            ),

            OperationDescriptor::DropCheckConstraint { table, name }
            | OperationDescriptor::DropUniqueConstraint { table, name }
            | OperationDescriptor::DropForeignKey { table, name } => {
                fill_simple(kind, &[("table", table), ("name", name)])
            }

            OperationDescriptor::CreateUniqueConstraint {
                table,
                name,
                columns,
            } => fill_simple(
                kind,
                &[("table", table), ("name", name), ("columns", &columns.join(", "))],
            ),

            OperationDescriptor::CreateForeignKey {
                table,
                name,
                column,
                to_table,
                to_column,
            } => fill_simple(
                kind,
                &[
                    ("table", table),
                    ("name", name),
                    ("column", column),
                    ("to_table", to_table),
                    ("to_column", to_column),
                ],
            ),

            OperationDescriptor::CreateIndex {
                table,
                name,
                columns,
                extra,
            } => {
                let extra = extra
                    .as_deref()
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(|e| format!(" {e}"))
                    .unwrap_or_default();
                fill_simple(
                    kind,
                    &[
                        ("table", table),
                        ("name", name),
                        ("columns", &columns.join(", ")),
                        ("extra", &extra),
                    ],
                )
            }

            OperationDescriptor::DropIndex { name } => fill_simple(kind, &[("name", name)]),
        }
    }

    fn skip_default(&self, sql_type: Option<&str>) -> bool {
        self.config.skip_policy.skip(sql_type)
    }
}
