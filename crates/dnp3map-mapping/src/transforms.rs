//! Row transforms applied to matched pairs

use crate::naming::NamingConvention;
use crate::Result;
use dnp3map_model::{PointRecord, PointTable};

/// Appends a fixed suffix to one column of a matched target row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTransform {
    column: usize,
    suffix: String,
}

impl SuffixTransform {
    /// Transform writing to the column at `column`
    pub fn new(column: usize, suffix: impl Into<String>) -> Self {
        Self {
            column,
            suffix: suffix.into(),
        }
    }

    /// Transform for the named column of `table`, using the convention's suffix
    ///
    /// # Errors
    ///
    /// Returns an error when `table` has no such column.
    pub fn for_column(table: &PointTable, column: &str, naming: &NamingConvention) -> Result<Self> {
        let column = table.require_column(column)?;
        Ok(Self::new(column, naming.suffix.clone()))
    }

    /// The updated target row; every other field is left as it was.
    pub fn apply(&self, target: &PointRecord, _reference: &PointRecord) -> PointRecord {
        let mut updated = target.clone();
        let renamed = format!("{}{}", target.get(self.column), self.suffix);
        updated.set(self.column, renamed);
        updated
    }
}
