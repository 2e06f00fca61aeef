// src/model/column.rs
use serde::Serialize;

/// Data type tag for descriptive text columns.
///
/// Dimension tables contribute their first column carrying this tag to the
/// SELECT and GROUP BY lists.
pub const STRING_TYPE: &str = "string";

/// A catalog column.
///
/// `data_type` is an open-ended tag (`string`, `number`, `date`, ...); the
/// catalog format does not enumerate it, so it is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    /// Whether the column is a valid measure target.
    pub aggregatable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            aggregatable: false,
        }
    }

    /// Mark the column as aggregatable.
    pub fn aggregatable(mut self, aggregatable: bool) -> Self {
        self.aggregatable = aggregatable;
        self
    }

    pub fn is_string(&self) -> bool {
        self.data_type == STRING_TYPE
    }
}
