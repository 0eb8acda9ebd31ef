//! Tests for loading dialect configuration from disk.

use std::io::Write;

use hana_schema::prelude::*;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_config_and_generate() {
    let file = write_config(
        r#"{"default_model_store": "ROW", "model_store": {"Event": "COLUMN"}}"#,
    );
    let dialect = HanaDialect::new(DialectConfig::load(file.path()).unwrap());

    let event = OperationDescriptor::create_model_table(
        "Event",
        "event",
        vec![ColumnDefinition::new("id", "BIGINT").primary_key()],
    );
    let user = OperationDescriptor::create_model_table(
        "User",
        "auth_user",
        vec![ColumnDefinition::new("id", "BIGINT").primary_key()],
    );

    assert!(dialect.generate_sql(&event).unwrap().sql().starts_with("CREATE COLUMN TABLE event"));
    assert!(dialect.generate_sql(&user).unwrap().sql().starts_with("CREATE ROW TABLE auth_user"));
}

#[test]
fn unknown_override_fails_at_load_time() {
    let file = write_config(r#"{"model_store": {"Event": "PAGED"}}"#);
    let err = DialectConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, SchemaError::UnknownStorageKind { .. }));
    assert_eq!(err.to_string(), "Unknown storage kind 'PAGED' for 'Event'");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DialectConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SchemaError::Io(_)));
}

#[test]
fn malformed_file_is_serialization_error() {
    let file = write_config("{ not json");
    let err = DialectConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, SchemaError::Serialization(_)));
}
