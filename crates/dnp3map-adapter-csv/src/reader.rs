//! CSV reader

use crate::config::CsvConfig;
use crate::{Error, Result};
use dnp3map_model::{PointRecord, PointTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Reader for point tables and headerless record files
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    config: CsvConfig,
}

impl CsvReader {
    /// Create a new CSV reader with the default comma-separated configuration
    pub fn new() -> Self {
        Self {
            config: CsvConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    fn builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.config.delimiter_u8())
            .quote(self.config.quote_char_u8())
            .flexible(self.config.flexible);
        builder
    }

    /// Read a point table; the first record is the header.
    ///
    /// Header names are kept byte-for-byte. Rows shorter than the header are
    /// padded with empty strings.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed CSV or a row wider than the header.
    pub fn read_table<R: Read>(&self, reader: R) -> Result<PointTable> {
        let mut csv_reader = self.builder().has_headers(true).from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let width = headers.len();
        let mut table = PointTable::new(headers);

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .and_then(|p| usize::try_from(p.line()).ok())
                .unwrap_or(index + 2);

            let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
            if fields.len() > width {
                return Err(Error::row_length_mismatch(line, width, fields.len()));
            }
            if fields.len() < width {
                trace!(line, actual = fields.len(), expected = width, "Padding short row");
                fields.resize(width, String::new());
            }

            trace!(line, ?fields, "Read CSV row");
            table.push(PointRecord::new(index, fields));
        }

        debug!(row_count = table.len(), column_count = width, "Finished reading table");
        Ok(table)
    }

    /// Read a point table from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be opened, otherwise as
    /// [`CsvReader::read_table`].
    pub fn read_table_from_path<P: AsRef<Path>>(&self, path: P) -> Result<PointTable> {
        let path = path.as_ref();
        let file = open(path)?;
        debug!(path = %path.display(), "Reading point table");
        self.read_table(file)
    }

    /// Read every record as raw fields, including the first line when the
    /// configuration has no header.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed CSV.
    pub fn read_records<R: Read>(&self, reader: R) -> Result<Vec<Vec<String>>> {
        let mut csv_reader = self
            .builder()
            .has_headers(self.config.has_header)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            records.push(record.iter().map(str::to_string).collect());
        }
        debug!(record_count = records.len(), "Finished reading records");
        Ok(records)
    }

    /// Read raw records from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be opened, otherwise as
    /// [`CsvReader::read_records`].
    pub fn read_records_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Vec<String>>> {
        let path = path.as_ref();
        let file = open(path)?;
        debug!(path = %path.display(), "Reading records");
        self.read_records(file)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::io(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MAP: &str = "Type, DNP3 Address, Variable Name, Description\n\
                       BinaryInputs, 0, @GV.Pump1, Pump running\n\
                       BinaryOutputs, 0, @GV.Pump1, Pump start\n";

    #[test]
    fn test_read_table_keeps_header_spacing() {
        let table = CsvReader::new().read_table(Cursor::new(MAP)).unwrap();
        assert_eq!(
            table.headers,
            vec!["Type", " DNP3 Address", " Variable Name", " Description"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].index, 1);
        assert_eq!(table.rows[1].get(2), " @GV.Pump1");
    }

    #[test]
    fn test_read_table_pads_short_rows() {
        let data = "Type,Address,Name,Description\nBinaryInputs,1,Pump1\n";
        let table = CsvReader::new().read_table(Cursor::new(data)).unwrap();
        assert_eq!(table.rows[0].fields, vec!["BinaryInputs", "1", "Pump1", ""]);
    }

    #[test]
    fn test_read_table_rejects_wide_rows() {
        let data = "Type,Address\nBinaryInputs,1,Pump1\n";
        let err = CsvReader::new().read_table(Cursor::new(data)).unwrap_err();
        match err {
            Error::RowLengthMismatch {
                line,
                expected,
                actual,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected row length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_read_table_quoted_fields() {
        let data = "Type,Name,Description\nAnalogInputs,Level,\"Tank level, metres\"\n";
        let table = CsvReader::new().read_table(Cursor::new(data)).unwrap();
        assert_eq!(table.rows[0].get(2), "Tank level, metres");
    }

    #[test]
    fn test_read_records_headerless_tab_separated() {
        let data = "Pump1\tBOOL\nLevel\tREAL\nbroken\n";
        let reader = CsvReader::new().with_config(CsvConfig::tab_separated());
        let records = reader.read_records(Cursor::new(data)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], vec!["Pump1", "BOOL"]);
        assert_eq!(records[2], vec!["broken"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvReader::new()
            .read_table_from_path("/path/that/does/not/exist.csv")
            .unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, "/path/that/does/not/exist.csv"),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
