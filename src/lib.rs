//! # semplan
//!
//! A semantic-layer query compiler: catalog metadata plus a small
//! semantics request in, one SQL statement out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        MetadataProvider (tables.yaml, joins.yaml)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [load_catalog]
//! ┌─────────────────────────────────────────────────────────┐
//! │          Catalog (tables, columns, join edges)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [JoinResolver + QueryPlanner]
//! ┌─────────────────────────────────────────────────────────┐
//! │                      QueryPlan                           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [SqlRenderer]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     SQL string                           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the provider is synchronous and pure, so one catalog
//! snapshot can serve concurrent requests.

pub mod compile;
pub mod config;
pub mod metadata;
pub mod model;
pub mod planner;
pub mod semantics;
pub mod sql;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::{compile, CompileError, CompileOptions, CompileOutput};
    pub use crate::metadata::{
        CatalogLoadError, MetadataProvider, StaticMetadataProvider, YamlMetadataProvider,
    };
    pub use crate::model::{Catalog, Column, JoinEdge, JoinKey, Table};
    pub use crate::planner::{
        Aggregates, Join, JoinResolver, PlanError, PlanOptions, QueryPlan, QueryPlanner,
    };
    pub use crate::semantics::{MeasureSpec, SemanticsRequest};
    pub use crate::sql::SqlRenderer;
}

// Also export at crate root for convenience
pub use compile::{compile, CompileOptions};
pub use model::Catalog;
pub use semantics::SemanticsRequest;
