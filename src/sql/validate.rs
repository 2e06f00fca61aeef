//! Syntax validation of rendered SQL.
//!
//! Uses sqlparser-rs to parse the output. Only syntax is checked: a query
//! referencing an alias with no JOIN clause still parses.

use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

/// Validates that a SQL string is syntactically valid.
///
/// # Example
///
/// ```ignore
/// use semplan::sql::validate_sql;
///
/// validate_sql("SELECT d.dept_name FROM employee_fact e")?;
/// ```
pub fn validate_sql(sql: &str) -> Result<(), String> {
    Parser::parse_sql(&GenericDialect {}, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL: {}\nSQL: {}", e, sql))
}
