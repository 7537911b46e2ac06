#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

//! # dnp3map-model
//!
//! Point table model and partitioning for DNP3 point-mapping tables.
//!
//! A mapping table exported from SCADA configuration is held as a
//! [`PointTable`]: the header row plus ordered [`PointRecord`]s. Tables are
//! split by their `Type` column into [`PointGroups`], one group per
//! [`PointType`], so output categories can be reconciled against their
//! paired input categories.

/// Partitioning of tables by column value and role mapping of groups.
pub mod partition;
/// DNP3 point categories and the fixed Out/In pairings.
pub mod point_type;
/// Single rows of a mapping table.
pub mod record;
/// Ordered tables sharing one column schema.
pub mod table;

pub use partition::{PointGroups, partition_by};
pub use point_type::{DNP3_TYPE_PAIRS, PointType, RenameSide, TypePairing};
pub use record::PointRecord;
pub use table::PointTable;

use thiserror::Error;

/// Errors that can occur when working with point tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Column not found: '{column}'")]
    MissingColumn { column: String },

    #[error("Unknown point type '{value}' at row {row}")]
    UnknownPointType { row: usize, value: String },

    #[error("Point type {point_type} is absent from the table")]
    MissingPointType { point_type: PointType },
}

impl Error {
    /// Build a missing-column error for the requested column name.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Build an unknown-type error naming the offending row.
    pub fn unknown_point_type(row: usize, value: impl Into<String>) -> Self {
        Self::UnknownPointType {
            row,
            value: value.into(),
        }
    }
}

/// Crate-local result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;
