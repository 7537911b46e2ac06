//! # dnp3map-mapping
//!
//! Reconciliation of paired point groups and generation of the derived
//! artifacts.
//!
//! [`update_if_match`] pairs every row of a target group with its
//! counterpart in a reference group by a composite key and renames matched
//! rows through a [`SuffixTransform`]. The names it collects feed the
//! structured-text and variable-sheet emitters in [`emit`].

pub mod emit;
pub mod lookup;
pub mod matcher;
pub mod naming;
pub mod transforms;

pub use emit::{create_structured_text, create_variable_sheet, variable_sheet_from_path};
pub use lookup::{DatatypeLookup, NOT_FOUND};
pub use matcher::{KeyValue, MatchOutcome, Mismatch, update_if_match};
pub use naming::NamingConvention;
pub use transforms::SuffixTransform;

use thiserror::Error;

/// Errors that can occur during mapping
#[derive(Error, Debug)]
pub enum Error {
    #[error("Table error: {0}")]
    Table(#[from] dnp3map_model::Error),

    #[error("Lookup error: {0}")]
    Lookup(#[from] dnp3map_adapter_csv::CsvError),

    #[error("IO error writing '{path}': {message}")]
    Io { path: String, message: String },
}

impl Error {
    /// Create an I/O error for an output path
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
