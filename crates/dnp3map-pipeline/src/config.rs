//! Run configuration
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the fixed layout the tool has always used: `in/map.csv`,
//! `in/var_sheet.csv`, and an `out/` directory.

use crate::{Error, Result};
use dnp3map_mapping::NamingConvention;
use dnp3map_model::RenameSide;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// SCADA point map (comma-separated, with header)
    pub input: PathBuf,
    /// Variable sheet (tab-separated name/datatype, no header)
    pub var_sheet: PathBuf,
    /// Directory receiving the timestamped artifacts
    pub output_dir: PathBuf,
    /// Column holding the DNP3 point type
    pub type_column: String,
    /// Columns forming the composite match key
    pub key_columns: Vec<String>,
    /// Column holding the variable name
    pub name_column: String,
    /// Prefix stripped and suffix appended to variable names
    pub naming: NamingConvention,
    /// Which side of each pairing is renamed
    pub rename_side: RenameSide,
    /// Fail when any of the four point types is absent
    pub require_all_types: bool,
    /// Rows logged as a preview after loading the map
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("in/map.csv"),
            var_sheet: PathBuf::from("in/var_sheet.csv"),
            output_dir: PathBuf::from("out"),
            type_column: "Type".to_string(),
            key_columns: vec!["DNP3 Address".to_string(), "Variable Name".to_string()],
            name_column: "Variable Name".to_string(),
            naming: NamingConvention::default(),
            rename_side: RenameSide::default(),
            require_all_types: false,
            preview_rows: 5,
        }
    }
}

impl PipelineConfig {
    /// Parse a YAML configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed YAML, unknown keys, or values
    /// rejected by [`PipelineConfig::validate`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read, otherwise as
    /// [`PipelineConfig::from_yaml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::io("read config", path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Self::from_yaml_str(&yaml)
    }

    /// Check the values a run depends on
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the key is empty or a column name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.key_columns.is_empty() {
            return Err(Error::config("key_columns must name at least one column"));
        }
        let columns = self
            .key_columns
            .iter()
            .chain([&self.type_column, &self.name_column]);
        for column in columns {
            if column.trim().is_empty() {
                return Err(Error::config("column names must not be blank"));
            }
        }
        if self.naming.suffix.is_empty() {
            return Err(Error::config("naming.suffix must not be empty"));
        }
        Ok(())
    }
}
