//! Query planner - turns a semantics request into a [`QueryPlan`].
//!
//! ```text
//! SemanticsRequest ──► QueryPlanner ──► QueryPlan ──► sql::SqlRenderer
//!                          │
//!                          ▼
//!                     JoinResolver (direct base -> dimension edges)
//! ```
//!
//! Planning is pure: it reads the catalog snapshot and never mutates it.

pub mod builder;
pub mod join_resolver;
pub mod plan;

pub use builder::QueryPlanner;
pub use join_resolver::JoinResolver;
pub use plan::{Aggregates, Join, QueryPlan};

use thiserror::Error;

/// Errors that can occur during planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The base entity or a dimension is not in the catalog.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Strict mode only: no direct join edge from the base to a dimension.
    #[error("No join edge from {from} to {to}")]
    MissingJoin { from: String, to: String },

    /// Strict mode only: a dimension table has no string-typed column.
    #[error("Dimension table {table} has no string column")]
    NoStringColumn { table: String },
}

pub type PlanResult<T> = Result<T, PlanError>;

/// Planner options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    /// Reject requests whose dimensions lack a join edge or a string
    /// column, instead of leaving them out of the plan.
    pub strict: bool,
}

impl PlanOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
