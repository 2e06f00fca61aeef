// src/model/join_edge.rs
use serde::{Deserialize, Serialize};

/// One equi-join key pair: `left_column = right_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinKey {
    #[serde(rename = "left")]
    pub left_column: String,
    #[serde(rename = "right")]
    pub right_column: String,
}

impl JoinKey {
    pub fn new(left_column: impl Into<String>, right_column: impl Into<String>) -> Self {
        Self {
            left_column: left_column.into(),
            right_column: right_column.into(),
        }
    }
}

/// A declared relationship from one catalog table to another.
///
/// Edges are directed: the resolver only follows `from -> to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinEdge {
    pub from: String,
    pub to: String,
    /// Join type tag (`INNER`, `LEFT`, ...), rendered upper-cased.
    #[serde(rename = "type")]
    pub join_type: String,
    #[serde(default)]
    pub keys: Vec<JoinKey>,
}

impl JoinEdge {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        join_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            join_type: join_type.into(),
            keys: Vec::new(),
        }
    }

    /// Add a key pair, builder style.
    pub fn key(mut self, left_column: impl Into<String>, right_column: impl Into<String>) -> Self {
        self.keys.push(JoinKey::new(left_column, right_column));
        self
    }

    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }
}
