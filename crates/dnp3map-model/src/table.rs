//! Point tables

use crate::record::PointRecord;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of point records sharing one column schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    /// Column names exactly as they appeared in the source header
    pub headers: Vec<String>,

    /// Rows in table order
    pub rows: Vec<PointRecord>,
}

impl PointTable {
    /// Create an empty table with the given header
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Create a table from a header and rows
    pub fn with_rows(headers: Vec<String>, rows: Vec<PointRecord>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from raw field vectors, numbering rows from zero
    pub fn from_fields(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, fields)| PointRecord::new(index, fields))
            .collect();
        Self { headers, rows }
    }

    /// An empty table with the same header as `self`
    pub fn empty_like(&self) -> Self {
        Self::new(self.headers.clone())
    }

    /// Append a row
    pub fn push(&mut self, record: PointRecord) {
        self.rows.push(record);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    ///
    /// Header names are compared with surrounding whitespace removed on both
    /// sides, so `"DNP3 Address"` finds a column exported as `" DNP3 Address"`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers.iter().position(|h| h.trim() == wanted)
    }

    /// Index of a column by name, failing when it is absent
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] when no header matches.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::missing_column(name))
    }

    /// Resolve several column names at once
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] for the first name with no header.
    pub fn require_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| self.require_column(name.as_ref()))
            .collect()
    }

    /// Append all rows of `other`, keeping their source indices
    pub fn extend(&mut self, other: PointTable) {
        self.rows.extend(other.rows);
    }
}
