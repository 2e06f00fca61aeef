//! SQL generation module.
//!
//! - [`render`] - plan-to-SQL text rendering
//! - [`validate`] - sqlparser-based syntax check of rendered SQL

pub mod render;
pub mod validate;

pub use render::{aggregate_expr, SqlRenderer};
pub use validate::validate_sql;
