//! Error types for CSV adapter with context

use thiserror::Error;

/// Errors that can occur when working with CSV
#[derive(Error, Debug, Clone)]
pub enum CsvError {
    /// CSV read error with context
    #[error("CSV read error at line {line}: {message}")]
    Read { line: usize, message: String },

    /// CSV write error
    #[error("CSV write error: {0}")]
    Write(String),

    /// I/O error with the path being accessed
    #[error("IO error for '{path}': {message}")]
    Io { path: String, message: String },

    /// Row wider than the header
    #[error("Row length mismatch at line {line}: expected {expected} columns, got {actual}")]
    RowLengthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

impl CsvError {
    /// Create a read error at a specific line
    pub fn read_at(line: usize, message: impl Into<String>) -> Self {
        Self::Read {
            line,
            message: message.into(),
        }
    }

    /// Create a row-length mismatch error.
    pub fn row_length_mismatch(line: usize, expected: usize, actual: usize) -> Self {
        Self::RowLengthMismatch {
            line,
            expected,
            actual,
        }
    }

    /// Create a write error
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }

    /// Create an I/O error for a path
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(e: csv::Error) -> Self {
        let line = e
            .position()
            .map_or(0, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));
        Self::read_at(line, e.to_string())
    }
}

/// Result type alias for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;
