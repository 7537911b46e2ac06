//! Datatype lookup for the variable sheet

use crate::Result;
use dnp3map_adapter_csv::{CsvConfig, CsvReader};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Datatype written when a variable has no lookup entry
pub const NOT_FOUND: &str = "NOT FOUND";

/// Variable name to datatype mapping loaded from a variable sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatatypeLookup {
    entries: HashMap<String, String>,
}

impl DatatypeLookup {
    /// Build a lookup from raw records.
    ///
    /// The first column is the name and the second the datatype; any further
    /// columns are ignored. Records with fewer than two columns are skipped
    /// and the first record for a name wins.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;
        for mut record in records {
            if record.len() < 2 {
                skipped += 1;
                continue;
            }
            let datatype = record.swap_remove(1);
            let name = record.swap_remove(0);
            entries.entry(name).or_insert(datatype);
        }
        debug!(entries = entries.len(), skipped, "Built datatype lookup");
        Self { entries }
    }

    /// Load a headerless tab-separated variable sheet
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is malformed CSV.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let records = CsvReader::new()
            .with_config(CsvConfig::tab_separated())
            .read_records_from_path(path)?;
        Ok(Self::from_records(records))
    }

    /// Datatype registered for a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Datatype for a name, or [`NOT_FOUND`]
    pub fn datatype_or_sentinel(&self, name: &str) -> &str {
        self.get(name).unwrap_or(NOT_FOUND)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lookup holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for DatatypeLookup {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self::from_records(
            iter.into_iter()
                .map(|(name, datatype)| vec![name.to_string(), datatype.to_string()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| (*s).to_string()).collect())
            .collect()
    }

    #[test]
    fn short_rows_are_skipped() {
        let lookup = DatatypeLookup::from_records(records(&[
            &["Pump1", "BOOL"],
            &["orphan"],
            &[],
            &["Level", "REAL", "comment"],
        ]));
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("Level"), Some("REAL"));
        assert_eq!(lookup.get("orphan"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let lookup: DatatypeLookup = [("Pump1", "BOOL"), ("Pump1", "INT")].into_iter().collect();
        assert_eq!(lookup.get("Pump1"), Some("BOOL"));
    }

    #[test]
    fn missing_names_use_sentinel() {
        let lookup: DatatypeLookup = [("X", "BOOL")].into_iter().collect();
        assert_eq!(lookup.datatype_or_sentinel("X"), "BOOL");
        assert_eq!(lookup.datatype_or_sentinel("Z"), "NOT FOUND");
    }
}
