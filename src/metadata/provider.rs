//! MetadataProvider trait definition.
//!
//! A provider hands the compiler a fully materialised catalog snapshot. Any
//! I/O, retries or timeouts live behind this trait; the planner never sees
//! them.

use std::collections::HashMap;

use super::error::MetadataResult;
use crate::model::{Catalog, JoinEdge, Table};

/// Trait for loading catalog metadata.
///
/// # Example
///
/// ```ignore
/// use semplan::metadata::{MetadataProvider, YamlMetadataProvider};
///
/// let provider = YamlMetadataProvider::new("./metadata");
/// let catalog = provider.load_catalog()?;
/// ```
pub trait MetadataProvider {
    /// Every table the catalog knows, keyed by logical name.
    fn load_tables(&self) -> MetadataResult<HashMap<String, Table>>;

    /// Join edges in declaration order.
    fn load_join_graph(&self) -> MetadataResult<Vec<JoinEdge>>;

    /// Load tables and join graph into one snapshot.
    fn load_catalog(&self) -> MetadataResult<Catalog> {
        let tables = self.load_tables()?;
        let joins = self.load_join_graph()?;

        tracing::info!(
            tables = tables.len(),
            joins = joins.len(),
            "loaded catalog snapshot"
        );

        Ok(Catalog::new(tables, joins))
    }
}

/// In-memory provider, for embedding callers that already hold the metadata.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataProvider {
    tables: HashMap<String, Table>,
    joins: Vec<JoinEdge>,
}

impl StaticMetadataProvider {
    pub fn new(tables: HashMap<String, Table>, joins: Vec<JoinEdge>) -> Self {
        Self { tables, joins }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.insert(table.name.clone(), table);
        self
    }

    pub fn with_join(mut self, edge: JoinEdge) -> Self {
        self.joins.push(edge);
        self
    }
}

impl MetadataProvider for StaticMetadataProvider {
    fn load_tables(&self) -> MetadataResult<HashMap<String, Table>> {
        Ok(self.tables.clone())
    }

    fn load_join_graph(&self) -> MetadataResult<Vec<JoinEdge>> {
        Ok(self.joins.clone())
    }
}
