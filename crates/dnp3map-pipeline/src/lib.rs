#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # dnp3map-pipeline
//!
//! Orchestration of one reconciliation run.
//!
//! A run reads the SCADA point map and the variable sheet, splits the map by
//! point type, reconciles each output category with its input category, and
//! writes three artifacts named after the run's timestamp: the updated map,
//! the structured-text fragment, and the variable declaration sheet.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use output::{OutputPaths, TIMESTAMP_FORMAT};
pub use pipeline::{Pipeline, Reconciliation};
pub use report::{PairingReport, RunReport};

use thiserror::Error;

/// Errors that can occur in the pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Pipeline error during {operation} for '{path}': {message}")]
    Pipeline {
        operation: String,
        path: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error during {operation} for '{path}': {message}")]
    Io {
        operation: String,
        path: String,
        message: String,
    },

    #[error("Table error: {0}")]
    Table(#[from] dnp3map_model::Error),

    #[error("Mapping error: {0}")]
    Mapping(#[from] dnp3map_mapping::Error),
}

impl Error {
    /// Create a structured pipeline error with operation/path context.
    pub fn pipeline(
        operation: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Pipeline {
            operation: operation.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a structured I/O error with operation/path context.
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_error_preserves_operation_and_path_context() {
        let error = Error::pipeline("read map", "in/map.csv", "missing header");
        match error {
            Error::Pipeline {
                operation,
                path,
                message,
            } => {
                assert_eq!(operation, "read map");
                assert_eq!(path, "in/map.csv");
                assert_eq!(message, "missing header");
            }
            _ => panic!("expected pipeline variant"),
        }
    }

    #[test]
    fn io_error_names_operation_and_path() {
        let error = Error::io("create output directory", "out", "permission denied");
        assert_eq!(
            error.to_string(),
            "IO error during create output directory for 'out': permission denied"
        );
    }

    #[test]
    fn model_errors_convert() {
        let error: Error = dnp3map_model::Error::missing_column("Type").into();
        assert_eq!(error.to_string(), "Table error: Column not found: 'Type'");
    }
}
