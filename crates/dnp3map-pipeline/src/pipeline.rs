//! Pipeline orchestration
//!
//! A run is one linear pass: load the map and the variable sheet, split the
//! map by point type, reconcile each pairing, then emit the artifacts.

use dnp3map_adapter_csv::{CsvReader, CsvWriter};
use dnp3map_mapping::{
    DatatypeLookup, SuffixTransform, create_structured_text, create_variable_sheet,
    update_if_match,
};
use dnp3map_model::{DNP3_TYPE_PAIRS, PointGroups, PointTable};
use tracing::{debug, info, warn};

use crate::{Error, OutputPaths, PairingReport, PipelineConfig, Result, RunReport};

/// Everything a reconciliation produced
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The full map after renaming, groups concatenated in split order
    pub table: PointTable,
    /// Structured-text assignment fragment
    pub structured_text: String,
    /// Variable declaration sheet
    pub var_sheet: String,
    /// Counts, mismatches, and written paths
    pub report: RunReport,
}

/// Reconciliation pipeline for one configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with default configuration
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// The configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reconcile an in-memory map; nothing is read or written.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured column is missing or the `Type`
    /// column holds an unknown or (with `require_all_types`) absent category.
    pub fn reconcile(&self, table: &PointTable, lookup: &DatatypeLookup) -> Result<Reconciliation> {
        self.reconcile_into(table, lookup, None)
    }

    /// Read the configured inputs and reconcile them without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error when an input cannot be read, otherwise as
    /// [`Pipeline::reconcile`].
    pub fn check(&self) -> Result<Reconciliation> {
        let (table, lookup) = self.load_inputs()?;
        self.reconcile_into(&table, &lookup, None)
    }

    /// Read the configured inputs, reconcile them, and write the artifacts
    ///
    /// # Errors
    ///
    /// Returns an error when an input cannot be read, the output directory
    /// cannot be created, or an artifact cannot be written.
    pub fn run(&self, outputs: &OutputPaths) -> Result<Reconciliation> {
        let (table, lookup) = self.load_inputs()?;

        let dir = outputs.dir();
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::io(
                "create output directory",
                dir.display().to_string(),
                e.to_string(),
            )
        })?;

        self.reconcile_into(&table, &lookup, Some(outputs))
    }

    /// [`Pipeline::run`] with artifacts stamped with the current local time
    ///
    /// # Errors
    ///
    /// As [`Pipeline::run`].
    pub fn run_now(&self) -> Result<Reconciliation> {
        self.run(&OutputPaths::now(&self.config.output_dir))
    }

    fn load_inputs(&self) -> Result<(PointTable, DatatypeLookup)> {
        let input = &self.config.input;
        let table = CsvReader::new()
            .read_table_from_path(input)
            .map_err(|e| {
                Error::pipeline("read map", input.display().to_string(), e.to_string())
            })?;
        info!(path = %input.display(), rows = table.len(), "Loaded point map");
        for record in table.rows.iter().take(self.config.preview_rows) {
            info!(row = record.index, fields = ?record.fields, "Preview");
        }

        let var_sheet = &self.config.var_sheet;
        let lookup = DatatypeLookup::load(var_sheet).map_err(|e| {
            Error::pipeline(
                "read variable sheet",
                var_sheet.display().to_string(),
                e.to_string(),
            )
        })?;
        info!(path = %var_sheet.display(), entries = lookup.len(), "Loaded variable sheet");

        Ok((table, lookup))
    }

    fn reconcile_into(
        &self,
        table: &PointTable,
        lookup: &DatatypeLookup,
        outputs: Option<&OutputPaths>,
    ) -> Result<Reconciliation> {
        let config = &self.config;

        info!(column = %config.type_column, "Splitting map by point type");
        let mut groups =
            PointGroups::from_table(table, &config.type_column, config.require_all_types)?;
        let transform = SuffixTransform::for_column(table, &config.name_column, &config.naming)?;

        info!("Updating point groups");
        let mut report = RunReport {
            rows: table.len(),
            ..RunReport::default()
        };
        for pairing in DNP3_TYPE_PAIRS {
            let (target_type, reference_type) = pairing.roles(config.rename_side);
            let Some((target, reference)) = groups.pair_mut(target_type, reference_type) else {
                debug!(pairing = %pairing.label(), "No target rows, skipping pairing");
                report
                    .pairings
                    .push(PairingReport::empty(pairing, config.rename_side));
                continue;
            };

            let outcome = update_if_match(
                target,
                &reference,
                &config.key_columns,
                &config.name_column,
                |t, r| transform.apply(t, r),
            )?;
            for mismatch in &outcome.mismatches {
                warn!(
                    pairing = %pairing.label(),
                    target = %target_type,
                    row = mismatch.row,
                    "{mismatch}"
                );
            }
            info!(
                pairing = %pairing.label(),
                matched = outcome.matched(),
                unmatched = outcome.mismatches.len(),
                "Reconciled {target_type} against {reference_type}"
            );

            report.modified.extend(outcome.modified.iter().cloned());
            report.pairings.push(PairingReport::from_outcome(
                pairing,
                config.rename_side,
                target.len(),
                &outcome,
            ));
        }

        let table = groups.into_table();

        if let Some(paths) = outputs {
            info!(path = %paths.map.display(), "Saving point map");
            CsvWriter::new()
                .write_table_to_path(&paths.map, &table)
                .map_err(|e| {
                    Error::pipeline("write map", paths.map.display().to_string(), e.to_string())
                })?;
            info!(path = %paths.structured_text.display(), "Saving structured text");
        }
        let structured_text = create_structured_text(
            &report.modified,
            &config.naming,
            outputs.map(|p| p.structured_text.as_path()),
        )?;

        if let Some(paths) = outputs {
            info!(path = %paths.var_sheet.display(), "Saving variable sheet");
        }
        let var_sheet = create_variable_sheet(
            &report.modified,
            lookup,
            &config.naming,
            outputs.map(|p| p.var_sheet.as_path()),
        )?;

        report.outputs = outputs.cloned();
        Ok(Reconciliation {
            table,
            structured_text,
            var_sheet,
            report,
        })
    }
}
