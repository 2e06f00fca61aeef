use std::path::PathBuf;

use insta::assert_snapshot;
use semplan::metadata::{MetadataProvider, YamlMetadataProvider};
use semplan::model::{Catalog, Column, JoinEdge, Table};
use semplan::planner::{QueryPlan, QueryPlanner};
use semplan::semantics::SemanticsRequest;
use semplan::sql::{validate_sql, SqlRenderer};

fn hr_catalog() -> Catalog {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hr");
    YamlMetadataProvider::new(dir).load_catalog().unwrap()
}

fn render(catalog: &Catalog, request: &SemanticsRequest) -> String {
    let plan = QueryPlanner::new(catalog).build(request).unwrap();
    SqlRenderer::new().render(&plan)
}

/// Top-level comma-separated items between SELECT and FROM.
fn select_items(sql: &str) -> usize {
    let list = sql
        .strip_prefix("SELECT ")
        .and_then(|rest| rest.split(" FROM ").next())
        .unwrap();
    if list.trim().is_empty() {
        0
    } else {
        list.split(", ").count()
    }
}

#[test]
fn test_headcount_by_department() {
    let catalog = Catalog::default()
        .with_table(
            Table::new("employee_fact", "e", "fact")
                .with_column(Column::new("employee_id", "number"))
                .with_column(Column::new("termination_date", "date")),
        )
        .with_table(
            Table::new("department_dim", "d", "dimension")
                .with_column(Column::new("dept_name", "string")),
        )
        .with_join(JoinEdge::new("employee_fact", "department_dim", "INNER").key("dept_id", "dept_id"));

    let request = SemanticsRequest::new("employee_fact")
        .dimension("department_dim")
        .measure("e.employee_id", "count")
        .filter("e.termination_date IS NOT NULL");

    assert_eq!(
        render(&catalog, &request),
        "SELECT d.dept_name, COUNT(e.employee_id) AS count_employee_id FROM employee_fact e \
         INNER JOIN department_dim d ON e.dept_id = d.dept_id WHERE e.termination_date IS NOT NULL \
         GROUP BY d.dept_name"
    );
}

#[test]
fn test_no_dimensions() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact").measure("e.employee_id", "count");

    let sql = render(&catalog, &request);
    assert_snapshot!(sql, @"SELECT COUNT(e.employee_id) AS count_employee_id FROM employee_fact e");
    assert!(!sql.contains("JOIN"));
    assert!(!sql.contains("GROUP BY"));
}

#[test]
fn test_two_dimensions_multi_key_lower_case_join_type() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .dimension("department_dim")
        .dimension("location_dim")
        .measure("e.salary", "avg")
        .measure("e.employee_id", "count");

    assert_snapshot!(
        render(&catalog, &request),
        @"SELECT d.dept_name, l.city, AVG(e.salary) AS avg_salary, COUNT(e.employee_id) AS count_employee_id FROM employee_fact e INNER JOIN department_dim d ON e.dept_id = d.dept_id LEFT JOIN location_dim l ON e.loc_id = l.loc_id AND e.country_code = l.country_code GROUP BY d.dept_name, l.city"
    );
}

#[test]
fn test_filters_and_joined() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .measure("e.salary", "SUM")
        .filter("e.salary > 1000")
        .filter("e.termination_date IS NULL");

    assert_snapshot!(
        render(&catalog, &request),
        @"SELECT SUM(e.salary) AS sum_salary FROM employee_fact e WHERE e.salary > 1000 AND e.termination_date IS NULL"
    );
}

#[test]
fn test_duplicate_measure_single_expression() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .measure("e.id", "count")
        .measure("e.id", "sum");

    let sql = render(&catalog, &request);
    assert_eq!(sql, "SELECT SUM(e.id) AS sum_id FROM employee_fact e");
    assert_eq!(sql.matches("e.id)").count(), 1);
}

#[test]
fn test_missing_edge_renders_dangling_alias() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .dimension("project_dim")
        .measure("e.employee_id", "count");

    assert_snapshot!(
        render(&catalog, &request),
        @"SELECT p.project_name, COUNT(e.employee_id) AS count_employee_id FROM employee_fact e GROUP BY p.project_name"
    );
}

#[test]
fn test_one_join_per_dimension_in_request_order() {
    let catalog = hr_catalog();
    let dimensions = ["grade_dim", "location_dim", "department_dim"];
    let request = dimensions
        .iter()
        .fold(SemanticsRequest::new("employee_fact"), |r, d| r.dimension(*d));

    let sql = render(&catalog, &request);
    assert_eq!(sql.matches(" JOIN ").count(), dimensions.len());

    let positions: Vec<_> = dimensions
        .iter()
        .map(|d| sql.find(&format!("JOIN {} ", d)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_select_item_count_matches_plan() {
    let catalog = hr_catalog();
    let requests = vec![
        SemanticsRequest::new("employee_fact").measure("e.employee_id", "count"),
        SemanticsRequest::new("employee_fact")
            .dimension("department_dim")
            .dimension("grade_dim")
            .measure("e.salary", "sum")
            .measure("e.salary", "max")
            .measure("e.employee_id", "count"),
        SemanticsRequest::new("employee_fact")
            .dimension("location_dim")
            .dimension("department_dim"),
    ];

    for request in &requests {
        let plan = QueryPlanner::new(&catalog).build(request).unwrap();
        let sql = SqlRenderer::new().render(&plan);
        assert_eq!(
            select_items(&sql),
            plan.select.len() + plan.aggregates.len(),
            "{}",
            sql
        );
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .dimension("department_dim")
        .dimension("location_dim")
        .measure("e.salary", "sum")
        .filter("e.termination_date IS NULL");
    let plan = QueryPlanner::new(&catalog).build(&request).unwrap();

    let renderer = SqlRenderer::new();
    assert_eq!(renderer.render(&plan), renderer.render(&plan));
    assert_eq!(plan.to_sql(), renderer.render(&plan));
}

#[test]
fn test_no_line_breaks_or_semicolon() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .dimension("department_dim")
        .measure("e.employee_id", "count")
        .filter("e.termination_date IS NOT NULL");

    let sql = render(&catalog, &request);
    assert!(!sql.contains('\n'));
    assert!(!sql.ends_with(';'));
}

#[test]
fn test_rendered_sql_parses() {
    let catalog = hr_catalog();
    let request = SemanticsRequest::new("employee_fact")
        .dimension("department_dim")
        .dimension("location_dim")
        .measure("e.salary", "avg")
        .filter("e.termination_date IS NOT NULL");

    validate_sql(&render(&catalog, &request)).unwrap();
}

#[test]
fn test_hand_built_plan() {
    let fact = Table::new("sales_fact", "f", "fact");
    let mut plan = QueryPlan::new(&fact);
    plan.select.push("f.region".to_string());
    plan.group_by.push("f.region".to_string());
    plan.aggregates.insert("f.amount", "sum");

    assert_snapshot!(
        plan.to_sql(),
        @"SELECT f.region, SUM(f.amount) AS sum_amount FROM sales_fact f GROUP BY f.region"
    );
}
