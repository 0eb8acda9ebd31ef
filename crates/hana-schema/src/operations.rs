//! Schema operations.
//!
//! This module defines the dialect-independent schema changes that can be
//! translated into SQL. Identifiers are carried as already-quoted names.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::literal::DefaultValue;

/// Definition of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Resolved SQL type (e.g. `NVARCHAR(255)`, `NCLOB`).
    pub sql_type: String,
    /// Whether the column allows NULL values.
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Default value, if any.
    #[serde(default)]
    pub default: Option<DefaultValue>,
    /// Whether this column is the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether this column has a UNIQUE constraint.
    #[serde(default)]
    pub unique: bool,
    /// Check constraint expression (if any).
    #[serde(default)]
    pub check: Option<String>,
}

impl ColumnDefinition {
    /// Creates a new nullable column.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            default: None,
            primary_key: false,
            unique: false,
            check: None,
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the column as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Sets the column as unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets a check constraint.
    #[must_use]
    pub fn check(mut self, expr: impl Into<String>) -> Self {
        self.check = Some(expr.into());
        self
    }
}

/// Discriminant of [`OperationDescriptor`], used to look up templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CreateTable,
    RenameTable,
    RetablespaceTable,
    AddColumn,
    AlterColumnType,
    SetColumnNullability,
    SetColumnDefault,
    DropColumnDefault,
    DropColumn,
    RenameColumn,
    CreateCheckConstraint,
    DropCheckConstraint,
    CreateUniqueConstraint,
    DropUniqueConstraint,
    CreateForeignKey,
    DropForeignKey,
    CreateIndex,
    DropIndex,
}

impl OperationKind {
    /// Every operation kind.
    pub const ALL: &'static [Self] = &[
        Self::CreateTable,
        Self::RenameTable,
        Self::RetablespaceTable,
        Self::AddColumn,
        Self::AlterColumnType,
        Self::SetColumnNullability,
        Self::SetColumnDefault,
        Self::DropColumnDefault,
        Self::DropColumn,
        Self::RenameColumn,
        Self::CreateCheckConstraint,
        Self::DropCheckConstraint,
        Self::CreateUniqueConstraint,
        Self::DropUniqueConstraint,
        Self::CreateForeignKey,
        Self::DropForeignKey,
        Self::CreateIndex,
        Self::DropIndex,
    ];

    /// Returns the variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateTable => "CreateTable",
            Self::RenameTable => "RenameTable",
            Self::RetablespaceTable => "RetablespaceTable",
            Self::AddColumn => "AddColumn",
            Self::AlterColumnType => "AlterColumnType",
            Self::SetColumnNullability => "SetColumnNullability",
            Self::SetColumnDefault => "SetColumnDefault",
            Self::DropColumnDefault => "DropColumnDefault",
            Self::DropColumn => "DropColumn",
            Self::RenameColumn => "RenameColumn",
            Self::CreateCheckConstraint => "CreateCheckConstraint",
            Self::DropCheckConstraint => "DropCheckConstraint",
            Self::CreateUniqueConstraint => "CreateUniqueConstraint",
            Self::DropUniqueConstraint => "DropUniqueConstraint",
            Self::CreateForeignKey => "CreateForeignKey",
            Self::DropForeignKey => "DropForeignKey",
            Self::CreateIndex => "CreateIndex",
            Self::DropIndex => "DropIndex",
        }
    }
}

const fn default_true() -> bool {
    true
}

/// A single schema change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationDescriptor {
    /// Create a new table.
    CreateTable {
        /// Table name.
        table: String,
        /// Model name used for the storage-kind lookup. Falls back to `table`.
        #[serde(default)]
        model: Option<String>,
        /// Column definitions.
        columns: Vec<ColumnDefinition>,
        /// Composite unique constraints.
        #[serde(default)]
        unique_together: Vec<Vec<String>>,
    },

    /// Rename a table.
    RenameTable {
        /// Old table name.
        old_table: String,
        /// New table name.
        new_table: String,
    },

    /// Move a table to another tablespace.
    RetablespaceTable {
        /// Table name.
        table: String,
        /// Target tablespace.
        new_tablespace: String,
    },

    /// Add a column to a table.
    AddColumn {
        /// Table name.
        table: String,
        /// Column definition.
        column: ColumnDefinition,
        /// Keep the database default after existing rows are filled.
        #[serde(default = "default_true")]
        keep_default: bool,
    },

    /// Change a column's type.
    AlterColumnType {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// New SQL type.
        sql_type: String,
    },

    /// Make a column NULL or NOT NULL.
    SetColumnNullability {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Current SQL type.
        sql_type: String,
        /// Target nullability.
        nullable: bool,
        /// Value written into existing NULLs before switching to NOT NULL.
        #[serde(default)]
        backfill: Option<DefaultValue>,
    },

    /// Set a column's default.
    SetColumnDefault {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Current SQL type.
        sql_type: String,
        /// New default.
        default: DefaultValue,
    },

    /// Remove a column's default.
    DropColumnDefault {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Current SQL type.
        sql_type: String,
    },

    /// Drop a column.
    DropColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// Rename a column.
    RenameColumn {
        /// Table name.
        table: String,
        /// Old column name.
        old_column: String,
        /// New column name.
        new_column: String,
    },

    /// Add a CHECK constraint.
    CreateCheckConstraint {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
        /// Check expression.
        check: String,
    },

    /// Drop a CHECK constraint.
    DropCheckConstraint {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
    },

    /// Add a UNIQUE constraint.
    CreateUniqueConstraint {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
        /// Columns that form the constraint.
        columns: Vec<String>,
    },

    /// Drop a UNIQUE constraint.
    DropUniqueConstraint {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
    },

    /// Add a foreign key.
    CreateForeignKey {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
        /// Referencing column.
        column: String,
        /// Referenced table.
        to_table: String,
        /// Referenced column.
        to_column: String,
    },

    /// Drop a foreign key.
    DropForeignKey {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
    },

    /// Create an index.
    CreateIndex {
        /// Table name.
        table: String,
        /// Index name.
        name: String,
        /// Indexed columns.
        columns: Vec<String>,
        /// Trailing clause appended after the column list.
        #[serde(default)]
        extra: Option<String>,
    },

    /// Drop an index.
    DropIndex {
        /// Index name.
        name: String,
    },
}

impl OperationDescriptor {
    // Convenience constructors

    /// Creates a CreateTable operation.
    #[must_use]
    pub fn create_table(table: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self::CreateTable {
            table: table.into(),
            model: None,
            columns,
            unique_together: Vec::new(),
        }
    }

    /// Creates a CreateTable operation for a named model.
    #[must_use]
    pub fn create_model_table(
        model: impl Into<String>,
        table: impl Into<String>,
        columns: Vec<ColumnDefinition>,
    ) -> Self {
        Self::CreateTable {
            table: table.into(),
            model: Some(model.into()),
            columns,
            unique_together: Vec::new(),
        }
    }

    /// Creates a RenameTable operation.
    #[must_use]
    pub fn rename_table(old_table: impl Into<String>, new_table: impl Into<String>) -> Self {
        Self::RenameTable {
            old_table: old_table.into(),
            new_table: new_table.into(),
        }
    }

    /// Creates a RetablespaceTable operation.
    #[must_use]
    pub fn retablespace_table(table: impl Into<String>, new_tablespace: impl Into<String>) -> Self {
        Self::RetablespaceTable {
            table: table.into(),
            new_tablespace: new_tablespace.into(),
        }
    }

    /// Creates an AddColumn operation that keeps its default.
    #[must_use]
    pub fn add_column(table: impl Into<String>, column: ColumnDefinition) -> Self {
        Self::AddColumn {
            table: table.into(),
            column,
            keep_default: true,
        }
    }

    /// Creates an AlterColumnType operation.
    #[must_use]
    pub fn alter_column_type(
        table: impl Into<String>,
        column: impl Into<String>,
        sql_type: impl Into<String>,
    ) -> Self {
        Self::AlterColumnType {
            table: table.into(),
            column: column.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Creates a SetColumnNullability operation.
    #[must_use]
    pub fn set_column_nullability(
        table: impl Into<String>,
        column: impl Into<String>,
        sql_type: impl Into<String>,
        nullable: bool,
    ) -> Self {
        Self::SetColumnNullability {
            table: table.into(),
            column: column.into(),
            sql_type: sql_type.into(),
            nullable,
            backfill: None,
        }
    }

    /// Creates a SetColumnDefault operation.
    #[must_use]
    pub fn set_column_default(
        table: impl Into<String>,
        column: impl Into<String>,
        sql_type: impl Into<String>,
        default: impl Into<DefaultValue>,
    ) -> Self {
        Self::SetColumnDefault {
            table: table.into(),
            column: column.into(),
            sql_type: sql_type.into(),
            default: default.into(),
        }
    }

    /// Creates a DropColumnDefault operation.
    #[must_use]
    pub fn drop_column_default(
        table: impl Into<String>,
        column: impl Into<String>,
        sql_type: impl Into<String>,
    ) -> Self {
        Self::DropColumnDefault {
            table: table.into(),
            column: column.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Creates a DropColumn operation.
    #[must_use]
    pub fn drop_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DropColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a RenameColumn operation.
    #[must_use]
    pub fn rename_column(
        table: impl Into<String>,
        old_column: impl Into<String>,
        new_column: impl Into<String>,
    ) -> Self {
        Self::RenameColumn {
            table: table.into(),
            old_column: old_column.into(),
            new_column: new_column.into(),
        }
    }

    /// Creates a CreateCheckConstraint operation.
    #[must_use]
    pub fn create_check(
        table: impl Into<String>,
        name: impl Into<String>,
        check: impl Into<String>,
    ) -> Self {
        Self::CreateCheckConstraint {
            table: table.into(),
            name: name.into(),
            check: check.into(),
        }
    }

    /// Creates a DropCheckConstraint operation.
    #[must_use]
    pub fn drop_check(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DropCheckConstraint {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Creates a CreateUniqueConstraint operation.
    #[must_use]
    pub fn create_unique(
        table: impl Into<String>,
        name: impl Into<String>,
        columns: Vec<String>,
    ) -> Self {
        Self::CreateUniqueConstraint {
            table: table.into(),
            name: name.into(),
            columns,
        }
    }

    /// Creates a DropUniqueConstraint operation.
    #[must_use]
    pub fn drop_unique(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DropUniqueConstraint {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Creates a CreateForeignKey operation.
    #[must_use]
    pub fn create_foreign_key(
        table: impl Into<String>,
        name: impl Into<String>,
        column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self::CreateForeignKey {
            table: table.into(),
            name: name.into(),
            column: column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
        }
    }

    /// Creates a DropForeignKey operation.
    #[must_use]
    pub fn drop_foreign_key(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DropForeignKey {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Creates a CreateIndex operation.
    #[must_use]
    pub fn create_index(
        table: impl Into<String>,
        name: impl Into<String>,
        columns: Vec<String>,
    ) -> Self {
        Self::CreateIndex {
            table: table.into(),
            name: name.into(),
            columns,
            extra: None,
        }
    }

    /// Creates a DropIndex operation.
    #[must_use]
    pub fn drop_index(name: impl Into<String>) -> Self {
        Self::DropIndex { name: name.into() }
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::CreateTable { .. } => OperationKind::CreateTable,
            Self::RenameTable { .. } => OperationKind::RenameTable,
            Self::RetablespaceTable { .. } => OperationKind::RetablespaceTable,
            Self::AddColumn { .. } => OperationKind::AddColumn,
            Self::AlterColumnType { .. } => OperationKind::AlterColumnType,
            Self::SetColumnNullability { .. } => OperationKind::SetColumnNullability,
            Self::SetColumnDefault { .. } => OperationKind::SetColumnDefault,
            Self::DropColumnDefault { .. } => OperationKind::DropColumnDefault,
            Self::DropColumn { .. } => OperationKind::DropColumn,
            Self::RenameColumn { .. } => OperationKind::RenameColumn,
            Self::CreateCheckConstraint { .. } => OperationKind::CreateCheckConstraint,
            Self::DropCheckConstraint { .. } => OperationKind::DropCheckConstraint,
            Self::CreateUniqueConstraint { .. } => OperationKind::CreateUniqueConstraint,
            Self::DropUniqueConstraint { .. } => OperationKind::DropUniqueConstraint,
            Self::CreateForeignKey { .. } => OperationKind::CreateForeignKey,
            Self::DropForeignKey { .. } => OperationKind::DropForeignKey,
            Self::CreateIndex { .. } => OperationKind::CreateIndex,
            Self::DropIndex { .. } => OperationKind::DropIndex,
        }
    }

    /// Checks that every required field is present.
    ///
    /// Identifier legality is left to the database.
    pub fn validate(&self) -> Result<()> {
        let op = self.kind().name();
        let required = |field: &str, value: &str| {
            if value.trim().is_empty() {
                Err(SchemaError::precondition(op, field))
            } else {
                Ok(())
            }
        };
        let required_list = |field: &str, values: &[String]| {
            if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
                Err(SchemaError::precondition(op, field))
            } else {
                Ok(())
            }
        };

        match self {
            Self::SetColumnDefault { default, .. } => default.validate()?,
            Self::SetColumnNullability {
                backfill: Some(backfill),
                ..
            } => backfill.validate()?,
            _ => {}
        }

        match self {
            Self::CreateTable {
                table,
                columns,
                unique_together,
                ..
            } => {
                required("table", table)?;
                if columns.is_empty() {
                    return Err(SchemaError::precondition(op, "columns"));
                }
                for column in columns {
                    validate_column(op, column)?;
                }
                for group in unique_together {
                    required_list("unique_together", group)?;
                }
                Ok(())
            }
            Self::RenameTable {
                old_table,
                new_table,
            } => {
                required("old_table", old_table)?;
                required("new_table", new_table)
            }
            Self::RetablespaceTable {
                table,
                new_tablespace,
            } => {
                required("table", table)?;
                required("new_tablespace", new_tablespace)
            }
            Self::AddColumn { table, column, .. } => {
                required("table", table)?;
                validate_column(op, column)
            }
            Self::AlterColumnType {
                table,
                column,
                sql_type,
            }
            | Self::SetColumnNullability {
                table,
                column,
                sql_type,
                ..
            }
            | Self::SetColumnDefault {
                table,
                column,
                sql_type,
                ..
            }
            | Self::DropColumnDefault {
                table,
                column,
                sql_type,
            } => {
                required("table", table)?;
                required("column", column)?;
                required("sql_type", sql_type)
            }
            Self::DropColumn { table, column } => {
                required("table", table)?;
                required("column", column)
            }
            Self::RenameColumn {
                table,
                old_column,
                new_column,
            } => {
                required("table", table)?;
                required("old_column", old_column)?;
                required("new_column", new_column)
            }
            Self::CreateCheckConstraint { table, name, check } => {
                required("table", table)?;
                required("name", name)?;
                required("check", check)
            }
            Self::DropCheckConstraint { table, name }
            | Self::DropUniqueConstraint { table, name }
            | Self::DropForeignKey { table, name } => {
                required("table", table)?;
                required("name", name)
            }
            Self::CreateUniqueConstraint {
                table,
                name,
                columns,
            }
            | Self::CreateIndex {
                table,
                name,
                columns,
                ..
            } => {
                required("table", table)?;
                required("name", name)?;
                required_list("columns", columns)
            }
            Self::CreateForeignKey {
                table,
                name,
                column,
                to_table,
                to_column,
            } => {
                required("table", table)?;
                required("name", name)?;
                required("column", column)?;
                required("to_table", to_table)?;
                required("to_column", to_column)
            }
            Self::DropIndex { name } => required("name", name),
        }
    }

    /// Returns a human-readable description of this operation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateTable { table, .. } => format!("Create table '{table}'"),
            Self::RenameTable {
                old_table,
                new_table,
            } => format!("Rename table '{old_table}' to '{new_table}'"),
            Self::RetablespaceTable {
                table,
                new_tablespace,
            } => format!("Move table '{table}' to tablespace '{new_tablespace}'"),
            Self::AddColumn { table, column, .. } => {
                format!("Add column '{}' to table '{table}'", column.name)
            }
            Self::AlterColumnType {
                table,
                column,
                sql_type,
            } => format!("Alter type of column '{column}' in table '{table}' to {sql_type}"),
            Self::SetColumnNullability {
                table,
                column,
                nullable,
                ..
            } => {
                let target = if *nullable { "NULL" } else { "NOT NULL" };
                format!("Make column '{column}' in table '{table}' {target}")
            }
            Self::SetColumnDefault { table, column, .. } => {
                format!("Set default of column '{column}' in table '{table}'")
            }
            Self::DropColumnDefault { table, column, .. } => {
                format!("Drop default of column '{column}' in table '{table}'")
            }
            Self::DropColumn { table, column } => {
                format!("Drop column '{column}' from table '{table}'")
            }
            Self::RenameColumn {
                table,
                old_column,
                new_column,
            } => format!("Rename column '{old_column}' to '{new_column}' in table '{table}'"),
            Self::CreateCheckConstraint { table, name, .. } => {
                format!("Add check constraint '{name}' to table '{table}'")
            }
            Self::DropCheckConstraint { table, name } => {
                format!("Drop check constraint '{name}' from table '{table}'")
            }
            Self::CreateUniqueConstraint { table, name, .. } => {
                format!("Add unique constraint '{name}' to table '{table}'")
            }
            Self::DropUniqueConstraint { table, name } => {
                format!("Drop unique constraint '{name}' from table '{table}'")
            }
            Self::CreateForeignKey { table, name, .. } => {
                format!("Add foreign key '{name}' to table '{table}'")
            }
            Self::DropForeignKey { table, name } => {
                format!("Drop foreign key '{name}' from table '{table}'")
            }
            Self::CreateIndex { table, name, .. } => {
                format!("Create index '{name}' on table '{table}'")
            }
            Self::DropIndex { name } => format!("Drop index '{name}'"),
        }
    }
}

fn validate_column(op: &'static str, column: &ColumnDefinition) -> Result<()> {
    if column.name.trim().is_empty() {
        return Err(SchemaError::precondition(op, "column.name"));
    }
    if column.sql_type.trim().is_empty() {
        return Err(SchemaError::precondition(op, "column.sql_type"));
    }
    if let Some(default) = &column.default {
        default.validate()?;
    }
    Ok(())
}
