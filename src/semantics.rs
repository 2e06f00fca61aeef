//! Semantics requests: what the caller wants to query.
//!
//! ```json
//! {
//!   "base_entity": "employee_fact",
//!   "dimensions": ["department_dim"],
//!   "measures": [{ "column": "e.employee_id", "agg": "count" }],
//!   "filters": ["e.termination_date IS NOT NULL"]
//! }
//! ```
//!
//! Only `base_entity` is required; the lists default to empty.

use serde::{Deserialize, Serialize};

/// A column/aggregate pair computed over the base table's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Fully qualified column (`alias.column`).
    pub column: String,
    /// Aggregate function tag (`count`, `sum`, ...).
    pub agg: String,
}

impl MeasureSpec {
    pub fn new(column: impl Into<String>, agg: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            agg: agg.into(),
        }
    }
}

/// A semantics request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticsRequest {
    /// Logical name of the base (FROM) table.
    pub base_entity: String,
    /// Dimension tables to join, in output order.
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub measures: Vec<MeasureSpec>,
    /// Literal, already-qualified predicates; AND-ed together.
    #[serde(default)]
    pub filters: Vec<String>,
}

impl SemanticsRequest {
    pub fn new(base_entity: impl Into<String>) -> Self {
        Self {
            base_entity: base_entity.into(),
            dimensions: Vec::new(),
            measures: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn dimension(mut self, table: impl Into<String>) -> Self {
        self.dimensions.push(table.into());
        self
    }

    pub fn measure(mut self, column: impl Into<String>, agg: impl Into<String>) -> Self {
        self.measures.push(MeasureSpec::new(column, agg));
        self
    }

    pub fn filter(mut self, predicate: impl Into<String>) -> Self {
        self.filters.push(predicate.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
