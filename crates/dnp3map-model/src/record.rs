//! Point records

use serde::{Deserialize, Serialize};

/// One row of a point-mapping table.
///
/// Fields are kept as raw strings in column order. Only the columns the
/// reconciliation looks at are ever interpreted; everything else passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Zero-based position of the row in the source table
    pub index: usize,

    /// Field values in column order
    pub fields: Vec<String>,
}

impl PointRecord {
    /// Create a record at the given source position
    pub fn new(index: usize, fields: Vec<String>) -> Self {
        Self { index, fields }
    }

    /// Raw value of a column, or the empty string when the row is short
    pub fn get(&self, column: usize) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }

    /// Value of a column with surrounding whitespace removed
    pub fn trimmed(&self, column: usize) -> &str {
        self.get(column).trim()
    }

    /// Replace the value of a column, padding the row if needed
    pub fn set(&mut self, column: usize, value: impl Into<String>) {
        if column >= self.fields.len() {
            self.fields.resize(column + 1, String::new());
        }
        self.fields[column] = value.into();
    }

    /// Number of fields held by the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
