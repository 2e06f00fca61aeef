//! Plan-to-SQL rendering.
//!
//! Output grammar, on a single line with no trailing semicolon:
//!
//! ```text
//! SELECT <select-list> FROM <base.name> <base.alias>
//!   [ <JOIN_TYPE> JOIN <right.name> <right.alias> ON <condition> ]*
//!   [ WHERE <filter> AND <filter> ... ]
//!   [ GROUP BY <col>, <col> ... ]
//! ```
//!
//! Downstream tooling compares this text byte for byte, so every separator
//! here is part of the contract.

use crate::planner::{Join, QueryPlan};

/// Renders query plans as SQL text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlRenderer;

impl SqlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, plan: &QueryPlan<'_>) -> String {
        let mut sql = format!(
            "SELECT {} FROM {} {}",
            self.select_list(plan).join(", "),
            plan.base_table.name,
            plan.base_table.alias
        );

        for join in &plan.joins {
            sql.push(' ');
            sql.push_str(&self.join_clause(join));
        }

        if !plan.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&plan.filters.join(" AND "));
        }

        if !plan.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&plan.group_by.join(", "));
        }

        sql
    }

    /// Plain selections first, then one expression per aggregate.
    fn select_list(&self, plan: &QueryPlan<'_>) -> Vec<String> {
        let mut items = Vec::with_capacity(plan.select.len() + plan.aggregates.len());
        items.extend(plan.select.iter().cloned());
        items.extend(
            plan.aggregates
                .iter()
                .map(|(column, function)| aggregate_expr(column, function)),
        );
        items
    }

    fn join_clause(&self, join: &Join<'_>) -> String {
        format!(
            "{} JOIN {} {} ON {}",
            join.join_type.to_uppercase(),
            join.right.name,
            join.right.alias,
            join.condition
        )
    }
}

/// `COUNT(e.employee_id) AS count_employee_id`
pub fn aggregate_expr(column: &str, function: &str) -> String {
    format!(
        "{}({}) AS {}_{}",
        function.to_uppercase(),
        column,
        function.to_lowercase(),
        output_name(column)
    )
}

/// Last dot-separated segment of a qualified column.
fn output_name(column: &str) -> &str {
    column.rsplit('.').next().unwrap_or(column)
}
