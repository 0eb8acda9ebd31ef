//! End-to-end tests for DDL generation.
//!
//! These tests build operations the way a migration framework would, run
//! them through `HanaDialect::generate_sql()` and check the exact SQL.

use hana_schema::prelude::*;

fn dialect_with(storage: StorageConfig) -> HanaDialect {
    HanaDialect::new(DialectConfig {
        storage,
        ..DialectConfig::default()
    })
}

// =============================================================================
// Storage kind
// =============================================================================

#[test]
fn create_table_without_override_is_column_table() {
    let dialect = dialect_with(StorageConfig::new(StorageKind::Column));
    let op = OperationDescriptor::create_model_table(
        "Order",
        "shop_order",
        vec![ColumnDefinition::new("id", "INTEGER")],
    );

    let statement = dialect.generate_sql(&op).unwrap();
    assert_eq!(statement.sql(), "CREATE COLUMN TABLE shop_order (id INTEGER NULL)");
    assert_eq!(statement.sql().matches("id INTEGER").count(), 1);
    assert!(statement.follow_ups().is_empty());
}

#[test]
fn create_table_with_override_is_row_table() {
    let dialect = dialect_with(
        StorageConfig::new(StorageKind::Column).with_override("Foo", StorageKind::Row),
    );

    let foo = OperationDescriptor::create_model_table(
        "Foo",
        "app_foo",
        vec![ColumnDefinition::new("id", "INTEGER").primary_key()],
    );
    let bar = OperationDescriptor::create_model_table(
        "Bar",
        "app_bar",
        vec![ColumnDefinition::new("id", "INTEGER").primary_key()],
    );

    assert!(dialect.generate_sql(&foo).unwrap().sql().starts_with("CREATE ROW TABLE app_foo"));
    assert!(dialect.generate_sql(&bar).unwrap().sql().starts_with("CREATE COLUMN TABLE app_bar"));
}

#[test]
fn storage_kind_does_not_leak_between_tables() {
    let dialect = dialect_with(
        StorageConfig::new(StorageKind::Column).with_override("Cache", StorageKind::Row),
    );
    let columns = vec![ColumnDefinition::new("k", "NVARCHAR(64)").primary_key()];

    let first = OperationDescriptor::create_model_table("Cache", "cache", columns.clone());
    let second = OperationDescriptor::create_model_table("Report", "report", columns);

    assert!(dialect.generate_sql(&first).unwrap().sql().starts_with("CREATE ROW TABLE"));
    assert!(dialect.generate_sql(&second).unwrap().sql().starts_with("CREATE COLUMN TABLE"));
    assert!(dialect.generate_sql(&first).unwrap().sql().starts_with("CREATE ROW TABLE"));
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn add_nclob_column_with_default_has_no_default_clause() {
    let op = OperationDescriptor::add_column(
        "article",
        ColumnDefinition::new("body", "NCLOB").default("hello"),
    );

    let statement = HanaDialect::default().generate_sql(&op).unwrap();
    assert_eq!(statement.sql(), "ALTER TABLE article ADD (body NCLOB NULL)");
    for sql in statement.iter() {
        assert!(!sql.contains("DEFAULT"), "unexpected DEFAULT in {sql}");
    }
}

#[test]
fn add_integer_column_with_default_is_unquoted() {
    let op = OperationDescriptor::add_column(
        "article",
        ColumnDefinition::new("votes", "INTEGER").not_null().default(5_i64),
    );

    let sql = HanaDialect::default().generate_sql(&op).unwrap();
    assert!(sql.sql().contains("DEFAULT 5 "));
    assert!(!sql.sql().contains("'5'"));
}

#[test]
fn lob_set_default_keeps_type_clause() {
    let op = OperationDescriptor::set_column_default("article", "body", "Clob", "x");
    let statement = HanaDialect::default().generate_sql(&op).unwrap();
    assert_eq!(statement.sql(), "ALTER TABLE article ALTER (body Clob)");
}

#[test]
fn configured_lob_types_replace_builtin_set() {
    let dialect = HanaDialect::new(DialectConfig {
        skip_policy: DefaultSkipPolicy::new(["TEXT"]),
        ..DialectConfig::default()
    });

    let text = OperationDescriptor::set_column_default("t", "c", "TEXT", "x");
    let nclob = OperationDescriptor::set_column_default("t", "c", "NCLOB", "x");

    assert_eq!(dialect.generate_sql(&text).unwrap().sql(), "ALTER TABLE t ALTER (c TEXT)");
    assert_eq!(
        dialect.generate_sql(&nclob).unwrap().sql(),
        "ALTER TABLE t ALTER (c NCLOB DEFAULT 'x')"
    );
}

#[test]
fn literal_defaults_render_per_kind() {
    let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    let cases: Vec<(DefaultValue, &str)> = vec![
        (DefaultValue::from("O'Brien"), "'O''Brien'"),
        (DefaultValue::from(LiteralValue::Binary(vec![0xde, 0xad])), "'dead'"),
        (DefaultValue::from(true), "1"),
        (DefaultValue::from(false), "0"),
        (DefaultValue::from(LiteralValue::try_float(0.5).unwrap()), "0.5"),
        (DefaultValue::from(LiteralValue::from(date)), "'2020-01-31'"),
        (DefaultValue::Null, "NULL"),
    ];

    for (default, expected) in cases {
        let op = OperationDescriptor::set_column_default("t", "c", "NVARCHAR(20)", default);
        let sql = HanaDialect::default().generate_sql(&op).unwrap();
        assert_eq!(
            sql.sql(),
            format!("ALTER TABLE t ALTER (c NVARCHAR(20) DEFAULT {expected})")
        );
    }
}

// =============================================================================
// Renames
// =============================================================================

#[test]
fn rename_column_is_single_statement() {
    let op = OperationDescriptor::rename_column("T", "old", "new");
    let statement = HanaDialect::default().generate_sql(&op).unwrap();

    assert_eq!(statement.clone().into_statements(), vec!["RENAME COLUMN T.old TO new".to_string()]);
    assert_eq!(statement.sql().matches("T.").count(), 1);
}

// =============================================================================
// Serialized operations
// =============================================================================

#[test]
fn operations_from_json() {
    let json = r#"[
        {"CreateTable": {
            "table": "blog_post",
            "model": "Post",
            "columns": [
                {"name": "id", "sql_type": "INTEGER", "nullable": false, "primary_key": true},
                {"name": "body", "sql_type": "NCLOB", "nullable": true,
                 "default": {"Value": {"String": "draft"}}}
            ]
        }},
        {"CreateIndex": {"table": "blog_post", "name": "idx_post_id", "columns": ["id"]}},
        {"RenameTable": {"old_table": "blog_post", "new_table": "blog_entry"}}
    ]"#;
    let operations: Vec<OperationDescriptor> = serde_json::from_str(json).unwrap();

    let mut editor = SchemaEditor::new(HanaDialect::default(), Vec::new());
    editor.apply_all(&operations).unwrap();

    assert_eq!(
        editor.into_executor(),
        vec![
            "CREATE COLUMN TABLE blog_post (id INTEGER NOT NULL PRIMARY KEY, body NCLOB NULL)"
                .to_string(),
            "CREATE INDEX idx_post_id ON blog_post (id)".to_string(),
            "RENAME TABLE blog_post TO blog_entry".to_string(),
        ]
    );
}
