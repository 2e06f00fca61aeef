use std::fs;

use semplan::metadata::{CatalogLoadError, MetadataProvider, YamlMetadataProvider};
use tempfile::TempDir;

const TABLES: &str = r#"
tables:
  sales_fact:
    alias: f
    role: fact
    columns:
      amount: { type: number, aggregatable: true }
      sold_on: { type: date }
  store_dim:
    alias: s
    role: dimension
    columns:
      store_id: { type: number }
      store_name: { type: string }
"#;

const JOINS: &str = r#"
joins:
  - from: sales_fact
    to: store_dim
    type: LEFT
    keys:
      - { left: store_id, right: store_id }
"#;

fn write_metadata(tables: &str, joins: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tables.yaml"), tables).unwrap();
    fs::write(tmp.path().join("joins.yaml"), joins).unwrap();
    tmp
}

#[test]
fn test_load_catalog_from_directory() {
    let tmp = write_metadata(TABLES, JOINS);
    let catalog = YamlMetadataProvider::new(tmp.path()).load_catalog().unwrap();

    assert_eq!(catalog.tables().len(), 2);
    assert_eq!(catalog.joins().len(), 1);

    let store = catalog.table("store_dim").unwrap();
    assert_eq!(store.name, "store_dim");
    assert_eq!(store.alias, "s");
    assert_eq!(store.columns()[1].name, "store_name");
    assert_eq!(store.columns()[1].data_type, "string");
}

#[test]
fn test_custom_file_names() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("catalog.yml"), TABLES).unwrap();
    fs::write(tmp.path().join("graph.yml"), JOINS).unwrap();

    let provider = YamlMetadataProvider::new(tmp.path())
        .with_tables_file("catalog.yml")
        .with_joins_file("graph.yml");

    assert_eq!(provider.load_tables().unwrap().len(), 2);
    assert_eq!(provider.load_join_graph().unwrap().len(), 1);
}

#[test]
fn test_missing_document_is_io_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tables.yaml"), TABLES).unwrap();

    let err = YamlMetadataProvider::new(tmp.path()).load_catalog().unwrap_err();
    match err {
        CatalogLoadError::Io { path, .. } => assert!(path.ends_with("joins.yaml")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_document_is_yaml_error() {
    let tmp = write_metadata("tables: [not, a, mapping]", JOINS);

    let err = YamlMetadataProvider::new(tmp.path()).load_tables().unwrap_err();
    assert!(matches!(err, CatalogLoadError::Yaml { .. }), "got {:?}", err);
    assert!(err.to_string().contains("tables.yaml"));
}

#[test]
fn test_column_without_type_is_rejected() {
    let tables = r#"
tables:
  sales_fact:
    alias: f
    role: fact
    columns:
      amount: { aggregatable: true }
"#;
    let tmp = write_metadata(tables, JOINS);

    assert!(YamlMetadataProvider::new(tmp.path()).load_tables().is_err());
}

#[test]
fn test_duplicate_column_is_rejected() {
    let tables = r#"
tables:
  sales_fact:
    alias: f
    role: fact
    columns:
      amount: { type: number }
      amount: { type: string }
"#;
    let tmp = write_metadata(tables, JOINS);

    assert!(YamlMetadataProvider::new(tmp.path()).load_tables().is_err());
}

#[test]
fn test_join_without_keys_defaults_to_empty() {
    let joins = r#"
joins:
  - from: sales_fact
    to: store_dim
    type: CROSS
"#;
    let tmp = write_metadata(TABLES, joins);
    let edges = YamlMetadataProvider::new(tmp.path()).load_join_graph().unwrap();

    assert_eq!(edges.len(), 1);
    assert!(edges[0].keys.is_empty());
}
