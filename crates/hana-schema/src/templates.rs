//! SQL statement templates for SAP HANA.
//!
//! Placeholders are written as `{name}`. Only `create_table` is altered at
//! runtime, and only to insert the storage keyword.

use crate::error::{Result, SchemaError};
use crate::operations::OperationKind;
use crate::storage::StorageKind;

const CREATE_TABLE: &str = "CREATE {table_type} TABLE {table} ({definition})";
const RENAME_TABLE: &str = "RENAME TABLE {old_table} TO {new_table}";
const RETABLESPACE_TABLE: &str = "ALTER TABLE {table} MOVE TO {new_tablespace}";
const CREATE_COLUMN: &str = "ALTER TABLE {table} ADD ({column} {definition})";
const ALTER_COLUMN_TYPE: &str = "ALTER TABLE {table} ALTER ({column} {type})";
const ALTER_COLUMN_NULLABILITY: &str = "ALTER TABLE {table} ALTER ({column} {type} {nullability})";
const ALTER_COLUMN_DEFAULT: &str =
    "ALTER TABLE {table} ALTER ({column} {definition} DEFAULT {default})";
const ALTER_COLUMN_NO_DEFAULT: &str = "ALTER TABLE {table} ALTER ({column} {definition})";
const DELETE_COLUMN: &str = "ALTER TABLE {table} DROP ({column})";
const RENAME_COLUMN: &str = "RENAME COLUMN {table}.{old_column} TO {new_column}";
const CREATE_CHECK: &str = "ALTER TABLE {table} ADD CONSTRAINT {name} CHECK ({check})";
const DELETE_CHECK: &str = "ALTER TABLE {table} DROP CONSTRAINT {name}";
const CREATE_UNIQUE: &str = "ALTER TABLE {table} ADD CONSTRAINT {name} UNIQUE ({columns})";
const DELETE_UNIQUE: &str = "ALTER TABLE {table} DROP CONSTRAINT {name}";
const CREATE_FK: &str = "ALTER TABLE {table} ADD CONSTRAINT {name} FOREIGN KEY ({column}) \
                         REFERENCES {to_table} ({to_column}) ON DELETE CASCADE";
const DELETE_FK: &str = "ALTER TABLE {table} DROP CONSTRAINT {name}";
const CREATE_INDEX: &str = "CREATE INDEX {name} ON {table} ({columns}){extra}";
const DELETE_INDEX: &str = "DROP INDEX {name}";

/// Composite unique entry inside a CREATE TABLE definition list.
pub const CREATE_TABLE_UNIQUE: &str = "UNIQUE ({columns})";

/// Fills existing NULLs with a default value.
pub const UPDATE_WITH_DEFAULT: &str =
    "UPDATE {table} SET {column} = {default} WHERE {column} IS NULL";

/// Returns the template for an operation kind.
#[must_use]
pub const fn template(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::CreateTable => CREATE_TABLE,
        OperationKind::RenameTable => RENAME_TABLE,
        OperationKind::RetablespaceTable => RETABLESPACE_TABLE,
        OperationKind::AddColumn => CREATE_COLUMN,
        OperationKind::AlterColumnType => ALTER_COLUMN_TYPE,
        OperationKind::SetColumnNullability => ALTER_COLUMN_NULLABILITY,
        OperationKind::SetColumnDefault => ALTER_COLUMN_DEFAULT,
        OperationKind::DropColumnDefault => ALTER_COLUMN_NO_DEFAULT,
        OperationKind::DropColumn => DELETE_COLUMN,
        OperationKind::RenameColumn => RENAME_COLUMN,
        OperationKind::CreateCheckConstraint => CREATE_CHECK,
        OperationKind::DropCheckConstraint => DELETE_CHECK,
        OperationKind::CreateUniqueConstraint => CREATE_UNIQUE,
        OperationKind::DropUniqueConstraint => DELETE_UNIQUE,
        OperationKind::CreateForeignKey => CREATE_FK,
        OperationKind::DropForeignKey => DELETE_FK,
        OperationKind::CreateIndex => CREATE_INDEX,
        OperationKind::DropIndex => DELETE_INDEX,
    }
}

/// Returns the CREATE TABLE template with the storage keyword in place.
#[must_use]
pub fn create_table_template(kind: StorageKind) -> String {
    CREATE_TABLE.replacen("{table_type}", kind.keyword(), 1)
}

/// Substitutes `{name}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so braces inside literals are
/// copied through untouched. A placeholder with no binding is a
/// [`SchemaError::Precondition`] attributed to `operation`.
pub fn fill(template: &str, operation: &'static str, params: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let key = &after[..end];
        let value = params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
            .ok_or_else(|| SchemaError::precondition(operation, key))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_template_substitution() {
        assert_eq!(
            create_table_template(StorageKind::Row),
            "CREATE ROW TABLE {table} ({definition})"
        );
        assert_eq!(
            create_table_template(StorageKind::Column),
            "CREATE COLUMN TABLE {table} ({definition})"
        );
        // The registry itself stays untouched.
        assert!(template(OperationKind::CreateTable).contains("{table_type}"));
    }

    #[test]
    fn test_fill() {
        let sql = fill(
            template(OperationKind::RenameColumn),
            "RenameColumn",
            &[("table", "T"), ("old_column", "old"), ("new_column", "new")],
        )
        .unwrap();
        assert_eq!(sql, "RENAME COLUMN T.old TO new");
    }

    #[test]
    fn test_fill_repeated_placeholder() {
        let sql = fill(
            UPDATE_WITH_DEFAULT,
            "AddColumn",
            &[("table", "T"), ("column", "c"), ("default", "'x'")],
        )
        .unwrap();
        assert_eq!(sql, "UPDATE T SET c = 'x' WHERE c IS NULL");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let sql = fill(
            CREATE_CHECK,
            "CreateCheckConstraint",
            &[("table", "T"), ("name", "ck"), ("check", "c <> '{table}'")],
        )
        .unwrap();
        assert_eq!(sql, "ALTER TABLE T ADD CONSTRAINT ck CHECK (c <> '{table}')");
    }

    #[test]
    fn test_fill_unbound_placeholder() {
        let err = fill(DELETE_INDEX, "DropIndex", &[]).unwrap_err();
        match err {
            SchemaError::Precondition { operation, field } => {
                assert_eq!(operation, "DropIndex");
                assert_eq!(field, "name");
            }
            other => panic!("Expected Precondition, got {other:?}"),
        }
    }

    #[test]
    fn test_every_kind_has_template() {
        for kind in OperationKind::ALL {
            assert!(!template(*kind).is_empty());
        }
    }
}
