//! # dnp3map-adapter-csv
//!
//! CSV adapter for reading and writing DNP3 point-mapping tables.
//!
//! The SCADA export is read into a [`PointTable`](dnp3map_model::PointTable)
//! and written back the same way once it has been reconciled. Headerless
//! records (the tab-delimited variable sheet) are read as raw rows.
//!
//! ## Example Usage
//!
//! ```rust
//! use dnp3map_adapter_csv::{CsvConfig, CsvReader, CsvWriter};
//! use std::io::Cursor;
//!
//! let data = "Type, DNP3 Address, Variable Name\nBinaryInputs, 1, Pump1\n";
//! let table = CsvReader::new().read_table(Cursor::new(data)).unwrap();
//! assert_eq!(table.len(), 1);
//!
//! let mut out = Vec::new();
//! CsvWriter::new().write_table(&mut out, &table).unwrap();
//!
//! let lookup = CsvReader::new().with_config(CsvConfig::tab_separated());
//! let rows = lookup.read_records(Cursor::new("Pump1\tBOOL\n")).unwrap();
//! assert_eq!(rows[0], vec!["Pump1", "BOOL"]);
//! ```

pub mod config;
pub mod errors;
pub mod reader;
pub mod writer;

// Re-export main types
pub use config::{CsvConfig, RecordTerminator};
pub use errors::{CsvError, CsvResult};
pub use reader::CsvReader;
pub use writer::CsvWriter;

pub use errors::CsvError as Error;
pub type Result<T> = CsvResult<T>;
