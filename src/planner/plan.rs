//! Query plan types.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::Table;
use crate::sql::SqlRenderer;

/// A resolved join clause.
///
/// Both sides borrow from the catalog snapshot the plan was built against.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Join<'a> {
    pub left: &'a Table,
    pub right: &'a Table,
    /// Join type tag as declared on the edge.
    pub join_type: String,
    /// Fully aliased predicate, e.g. `f.dept_id = d.dept_id`.
    pub condition: String,
}

/// Aggregate expressions keyed by qualified column.
///
/// Iterates in insertion order. Inserting a column that is already present
/// replaces its function but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    entries: Vec<(String, String)>,
}

impl Aggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the aggregate function for `column`, returning the previous one.
    pub fn insert(&mut self, column: impl Into<String>, function: impl Into<String>) -> Option<String> {
        let column = column.into();
        let function = function.into();

        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => Some(std::mem::replace(existing, function)),
            None => {
                self.entries.push((column, function));
                None
            }
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, f)| f.as_str())
    }

    /// `(column, function)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, f)| (c.as_str(), f.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, F: Into<String>> FromIterator<(C, F)> for Aggregates {
    fn from_iter<I: IntoIterator<Item = (C, F)>>(iter: I) -> Self {
        let mut aggregates = Aggregates::new();
        for (column, function) in iter {
            aggregates.insert(column, function);
        }
        aggregates
    }
}

impl Serialize for Aggregates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, function) in &self.entries {
            map.serialize_entry(column, function)?;
        }
        map.end()
    }
}

/// Everything the renderer needs to emit one SELECT statement.
///
/// Built fresh per request and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QueryPlan<'a> {
    pub base_table: &'a Table,
    /// In the order the dimensions were requested.
    pub joins: Vec<Join<'a>>,
    /// Qualified column expressions; defines output column order.
    pub select: Vec<String>,
    pub aggregates: Aggregates,
    /// Literal predicates, combined with AND.
    pub filters: Vec<String>,
    pub group_by: Vec<String>,
}

impl<'a> QueryPlan<'a> {
    /// An empty plan over `base_table`.
    pub fn new(base_table: &'a Table) -> Self {
        Self {
            base_table,
            joins: Vec::new(),
            select: Vec::new(),
            aggregates: Aggregates::new(),
            filters: Vec::new(),
            group_by: Vec::new(),
        }
    }

    /// Render this plan as SQL.
    pub fn to_sql(&self) -> String {
        SqlRenderer::new().render(self)
    }
}
