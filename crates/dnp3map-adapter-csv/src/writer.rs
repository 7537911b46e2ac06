//! CSV writer

use crate::config::CsvConfig;
use crate::{Error, Result};
use dnp3map_model::PointTable;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

/// Writer for point tables
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    config: CsvConfig,
}

impl CsvWriter {
    /// Create a new CSV writer
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

    fn csv_writer<W: Write>(&self, writer: W) -> csv::Writer<W> {
        csv::WriterBuilder::new()
            .delimiter(self.config.delimiter_u8())
            .quote(self.config.quote_char_u8())
            .terminator(self.config.record_terminator.to_csv())
            .flexible(self.config.flexible)
            .from_writer(writer)
    }

    /// Write a point table: the header (when configured) then every row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when a record cannot be written.
    pub fn write_table<W: Write>(&self, writer: W, table: &PointTable) -> Result<()> {
        let mut csv_writer = self.csv_writer(writer);

        if self.config.has_header {
            csv_writer
                .write_record(&table.headers)
                .map_err(|e| Error::write(e.to_string()))?;
        }

        for record in &table.rows {
            csv_writer
                .write_record(&record.fields)
                .map_err(|e| Error::write(e.to_string()))?;
            trace!(row = record.index, "Wrote CSV row");
        }

        csv_writer.flush().map_err(|e| Error::write(e.to_string()))?;
        debug!(row_count = table.len(), "Finished writing table");
        Ok(())
    }

    /// Write a point table to a file, replacing any existing content
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be created, otherwise as
    /// [`CsvWriter::write_table`].
    pub fn write_table_to_path<P: AsRef<Path>>(&self, path: P, table: &PointTable) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), "Writing point table");
        self.write_table(file, table)
    }
}
