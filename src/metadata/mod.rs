//! Metadata provider module.
//!
//! Loads the catalog snapshot the planner works against.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MetadataProvider                           │
//! │  - load_tables()      -> name -> Table                          │
//! │  - load_join_graph()  -> [JoinEdge] (declaration order)         │
//! │  - load_catalog()     -> Catalog                                │
//! └─────────────────────────────────────────────────────────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   YamlMetadataProvider               StaticMetadataProvider
//!   (tables.yaml + joins.yaml)         (in-memory)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use semplan::metadata::{MetadataProvider, YamlMetadataProvider};
//!
//! let catalog = YamlMetadataProvider::new("./metadata").load_catalog()?;
//! ```

mod error;
mod provider;
mod yaml_provider;

pub use error::{CatalogLoadError, MetadataResult};
pub use provider::{MetadataProvider, StaticMetadataProvider};
pub use yaml_provider::{
    parse_join_graph_str, parse_tables_str, YamlMetadataProvider, DEFAULT_JOINS_FILE,
    DEFAULT_TABLES_FILE,
};
