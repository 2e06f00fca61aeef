use std::path::PathBuf;

use semplan::metadata::{MetadataProvider, YamlMetadataProvider};
use semplan::model::{Catalog, Column, JoinEdge, Table};

fn hr_catalog() -> Catalog {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hr");
    YamlMetadataProvider::new(dir).load_catalog().unwrap()
}

#[test]
fn test_fixture_tables_loaded() {
    let catalog = hr_catalog();

    assert_eq!(
        catalog.table_names(),
        vec!["department_dim", "employee_fact", "grade_dim", "location_dim", "project_dim"]
    );

    let fact = catalog.table("employee_fact").unwrap();
    assert_eq!(fact.alias, "e");
    assert_eq!(fact.role, "fact");
    assert!(fact.column("salary").unwrap().aggregatable);
}

#[test]
fn test_fixture_column_declaration_order() {
    let catalog = hr_catalog();
    let location = catalog.table("location_dim").unwrap();

    let names: Vec<_> = location.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["loc_id", "city", "country"]);
    assert_eq!(location.first_string_column().unwrap().name, "city");
}

#[test]
fn test_fixture_join_edges_in_declaration_order() {
    let catalog = hr_catalog();
    let targets: Vec<_> = catalog.joins().iter().map(|e| e.to.as_str()).collect();

    assert_eq!(
        targets,
        vec!["department_dim", "location_dim", "grade_dim", "department_dim", "location_dim"]
    );
    assert!(catalog.dangling_edges().is_empty());
}

#[test]
fn test_first_declared_edge_shadows_later_ones() {
    let catalog = hr_catalog();
    let edge = catalog.find_edge("employee_fact", "department_dim").unwrap();

    assert_eq!(edge.join_type, "INNER");
    assert_eq!(edge.keys[0].left_column, "dept_id");
}

#[test]
fn test_dangling_edge_reported_not_rejected() {
    let catalog = Catalog::default()
        .with_table(Table::new("orders", "o", "fact").with_column(Column::new("amount", "number")))
        .with_join(JoinEdge::new("orders", "customers", "INNER").key("customer_id", "id"))
        .with_join(JoinEdge::new("returns", "orders", "INNER").key("order_id", "id"));

    let dangling: Vec<_> = catalog
        .dangling_edges()
        .into_iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(dangling, vec![("orders", "customers"), ("returns", "orders")]);
}
