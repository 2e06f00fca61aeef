// src/model/table.rs
use serde::Serialize;

use super::column::Column;

/// A catalog table.
///
/// Columns keep their declaration order: the planner picks the *first*
/// string column of a dimension table, so a hash map would not do here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Physical/catalog name, used in FROM and JOIN clauses.
    pub name: String,
    /// Short name used to qualify columns in generated SQL.
    pub alias: String,
    /// Free-form classification ("fact", "dimension", ...). Not interpreted.
    pub role: String,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, alias: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            role: role.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column, builder style. See [`Table::insert_column`].
    pub fn with_column(mut self, column: Column) -> Self {
        self.insert_column(column);
        self
    }

    /// Insert a column.
    ///
    /// A column with the same name is replaced where it stands, so the
    /// position of the first declaration is kept.
    pub fn insert_column(&mut self, column: Column) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// First column whose data type is `string`, in declaration order.
    pub fn first_string_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_string())
    }

    /// Qualify a column name with this table's alias (`alias.column`).
    pub fn qualify(&self, column: &str) -> String {
        format!("{}.{}", self.alias, column)
    }
}
