//! YAML metadata directory.
//!
//! A metadata directory holds two documents:
//!
//! ```yaml
//! # tables.yaml
//! tables:
//!   employee_fact:
//!     alias: e
//!     role: fact
//!     columns:
//!       employee_id: { type: number, aggregatable: true }
//!       termination_date: { type: date }
//! ```
//!
//! ```yaml
//! # joins.yaml
//! joins:
//!   - from: employee_fact
//!     to: department_dim
//!     type: INNER
//!     keys:
//!       - { left: dept_id, right: dept_id }
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::error::{CatalogLoadError, MetadataResult};
use super::provider::MetadataProvider;
use crate::model::{Column, JoinEdge, Table};

pub const DEFAULT_TABLES_FILE: &str = "tables.yaml";
pub const DEFAULT_JOINS_FILE: &str = "joins.yaml";

const STRING_SOURCE: &str = "<string>";

/// Loads the catalog from `tables.yaml` and `joins.yaml` in one directory.
#[derive(Debug, Clone)]
pub struct YamlMetadataProvider {
    base: PathBuf,
    tables_file: String,
    joins_file: String,
}

impl YamlMetadataProvider {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            tables_file: DEFAULT_TABLES_FILE.to_string(),
            joins_file: DEFAULT_JOINS_FILE.to_string(),
        }
    }

    /// Override the table-definition file name.
    pub fn with_tables_file(mut self, name: impl Into<String>) -> Self {
        self.tables_file = name.into();
        self
    }

    /// Override the join-graph file name.
    pub fn with_joins_file(mut self, name: impl Into<String>) -> Self {
        self.joins_file = name.into();
        self
    }

    pub fn tables_path(&self) -> PathBuf {
        self.base.join(&self.tables_file)
    }

    pub fn joins_path(&self) -> PathBuf {
        self.base.join(&self.joins_file)
    }
}

impl MetadataProvider for YamlMetadataProvider {
    fn load_tables(&self) -> MetadataResult<HashMap<String, Table>> {
        let path = self.tables_path();
        tracing::debug!(path = %path.display(), "reading table definitions");
        let contents = read_document(&path)?;
        parse_tables(&contents, &path.display().to_string())
    }

    fn load_join_graph(&self) -> MetadataResult<Vec<JoinEdge>> {
        let path = self.joins_path();
        tracing::debug!(path = %path.display(), "reading join graph");
        let contents = read_document(&path)?;
        parse_join_graph(&contents, &path.display().to_string())
    }
}

/// Parse a table-definition document held in memory.
pub fn parse_tables_str(yaml: &str) -> MetadataResult<HashMap<String, Table>> {
    parse_tables(yaml, STRING_SOURCE)
}

/// Parse a join-graph document held in memory.
pub fn parse_join_graph_str(yaml: &str) -> MetadataResult<Vec<JoinEdge>> {
    parse_join_graph(yaml, STRING_SOURCE)
}

fn read_document(path: &Path) -> MetadataResult<String> {
    fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_tables(yaml: &str, source: &str) -> MetadataResult<HashMap<String, Table>> {
    let document: TablesDocument =
        serde_yaml::from_str(yaml).map_err(|e| CatalogLoadError::Yaml {
            path: source.to_string(),
            source: e,
        })?;

    let mut tables = HashMap::with_capacity(document.tables.len());
    for (name, doc) in document.tables {
        let table = doc.into_table(&name, source)?;
        tables.insert(name, table);
    }
    Ok(tables)
}

fn parse_join_graph(yaml: &str, source: &str) -> MetadataResult<Vec<JoinEdge>> {
    let document: JoinsDocument =
        serde_yaml::from_str(yaml).map_err(|e| CatalogLoadError::Yaml {
            path: source.to_string(),
            source: e,
        })?;
    Ok(document.joins)
}

// ============================================================================
// Document shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct TablesDocument {
    tables: HashMap<String, TableDocument>,
}

#[derive(Debug, Deserialize)]
struct TableDocument {
    alias: String,
    role: String,
    columns: OrderedColumns,
}

impl TableDocument {
    fn into_table(self, name: &str, source: &str) -> MetadataResult<Table> {
        let mut seen = HashSet::new();
        let mut table = Table::new(name, self.alias, self.role);

        for (column_name, doc) in self.columns.0 {
            if !seen.insert(column_name.clone()) {
                return Err(CatalogLoadError::Invalid {
                    path: source.to_string(),
                    message: format!("table '{}' declares column '{}' twice", name, column_name),
                });
            }
            table.insert_column(Column::new(column_name, doc.data_type).aggregatable(doc.aggregatable));
        }

        Ok(table)
    }
}

#[derive(Debug, Deserialize)]
struct ColumnDocument {
    #[serde(rename = "type")]
    data_type: String,
    #[serde(default)]
    aggregatable: bool,
}

#[derive(Debug, Deserialize)]
struct JoinsDocument {
    joins: Vec<JoinEdge>,
}

/// Column mapping that keeps document order.
#[derive(Debug)]
struct OrderedColumns(Vec<(String, ColumnDocument)>);

impl<'de> Deserialize<'de> for OrderedColumns {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColumnsVisitor;

        impl<'de> Visitor<'de> for ColumnsVisitor {
            type Value = OrderedColumns;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of column name to column definition")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut columns = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, doc)) = map.next_entry::<String, ColumnDocument>()? {
                    columns.push((name, doc));
                }
                Ok(OrderedColumns(columns))
            }
        }

        deserializer.deserialize_map(ColumnsVisitor)
    }
}
