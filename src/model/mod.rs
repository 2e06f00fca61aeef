//! Catalog model: tables, columns and join edges.
//!
//! Everything here is read-only once loaded. A [`Catalog`] is a snapshot
//! handed to the planner by reference; plans borrow tables out of it.

pub mod catalog;
pub mod column;
pub mod join_edge;
pub mod table;

pub use catalog::Catalog;
pub use column::{Column, STRING_TYPE};
pub use join_edge::{JoinEdge, JoinKey};
pub use table::Table;
