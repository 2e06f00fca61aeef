// src/model/catalog.rs
use std::collections::HashMap;

use super::join_edge::JoinEdge;
use super::table::Table;

/// An immutable catalog snapshot: tables keyed by logical name plus the
/// join-edge list in declaration order.
///
/// The snapshot is loaded once and then passed by reference to the join
/// resolver and query planner, so several requests can plan against it at
/// the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: HashMap<String, Table>,
    joins: Vec<JoinEdge>,
}

impl Catalog {
    pub fn new(tables: HashMap<String, Table>, joins: Vec<JoinEdge>) -> Self {
        Self { tables, joins }
    }

    /// Add a table keyed by its own name, builder style.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.insert(table.name.clone(), table);
        self
    }

    /// Append a join edge, builder style. Declaration order is kept.
    pub fn with_join(mut self, edge: JoinEdge) -> Self {
        self.joins.push(edge);
        self
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn tables(&self) -> &HashMap<String, Table> {
        &self.tables
    }

    /// Logical table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Join edges in declaration order.
    pub fn joins(&self) -> &[JoinEdge] {
        &self.joins
    }

    /// First declared edge running `from -> to`, if any.
    pub fn find_edge(&self, from: &str, to: &str) -> Option<&JoinEdge> {
        self.joins.iter().find(|edge| edge.connects(from, to))
    }

    /// Edges naming a table the catalog does not define.
    ///
    /// Loading tolerates these; they only fail once a request resolves them.
    pub fn dangling_edges(&self) -> Vec<&JoinEdge> {
        self.joins
            .iter()
            .filter(|edge| !self.contains_table(&edge.from) || !self.contains_table(&edge.to))
            .collect()
    }
}
