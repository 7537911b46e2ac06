//! Run report

use crate::output::OutputPaths;
use crate::{Error, Result};
use dnp3map_mapping::{MatchOutcome, Mismatch};
use dnp3map_model::{PointType, RenameSide, TypePairing};
use serde::Serialize;
use std::path::Path;

/// Outcome of reconciling one Out/In pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairingReport {
    /// The pairing reconciled
    pub pairing: TypePairing,
    /// Category whose rows were renamed
    pub target: PointType,
    /// Category searched for counterparts
    pub reference: PointType,
    /// Rows in the target category
    pub target_rows: usize,
    /// Target rows renamed
    pub matched: usize,
    /// Target rows left untouched
    pub mismatches: Vec<Mismatch>,
}

impl PairingReport {
    /// Report for a pairing whose target category had no rows
    pub fn empty(pairing: TypePairing, side: RenameSide) -> Self {
        let (target, reference) = pairing.roles(side);
        Self {
            pairing,
            target,
            reference,
            target_rows: 0,
            matched: 0,
            mismatches: Vec::new(),
        }
    }

    /// Report built from a matcher outcome
    pub fn from_outcome(
        pairing: TypePairing,
        side: RenameSide,
        target_rows: usize,
        outcome: &MatchOutcome,
    ) -> Self {
        Self {
            target_rows,
            matched: outcome.matched(),
            mismatches: outcome.mismatches.clone(),
            ..Self::empty(pairing, side)
        }
    }

    /// `Out/In` label of the pairing
    pub fn label(&self) -> String {
        self.pairing.label()
    }
}

/// Summary of a reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Rows in the input map
    pub rows: usize,
    /// One entry per Out/In pairing, binary first
    pub pairings: Vec<PairingReport>,
    /// Original names of every renamed variable, binary then analog
    pub modified: Vec<String>,
    /// Artifacts written, absent for a check-only run
    pub outputs: Option<OutputPaths>,
}

impl RunReport {
    /// Rows renamed across all pairings
    pub fn matched(&self) -> usize {
        self.pairings.iter().map(|p| p.matched).sum()
    }

    /// Every unmatched row across all pairings
    pub fn mismatches(&self) -> impl Iterator<Item = &Mismatch> {
        self.pairings.iter().flat_map(|p| p.mismatches.iter())
    }

    /// Number of unmatched rows across all pairings
    pub fn mismatch_count(&self) -> usize {
        self.pairings.iter().map(|p| p.mismatches.len()).sum()
    }

    /// Pretty JSON rendering
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::pipeline("render report", "<memory>", e.to_string()))
    }

    /// Write the JSON rendering to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| Error::io("write report", path.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnp3map_mapping::KeyValue;
    use dnp3map_model::DNP3_TYPE_PAIRS;

    fn mismatch(row: usize) -> Mismatch {
        Mismatch {
            row,
            key: vec![KeyValue {
                column: "DNP3 Address".into(),
                value: "2".into(),
            }],
            match_count: 0,
        }
    }

    fn report() -> RunReport {
        RunReport {
            rows: 6,
            pairings: vec![
                PairingReport {
                    target_rows: 2,
                    matched: 1,
                    mismatches: vec![mismatch(3)],
                    ..PairingReport::empty(DNP3_TYPE_PAIRS[0], RenameSide::Out)
                },
                PairingReport {
                    target_rows: 1,
                    matched: 1,
                    ..PairingReport::empty(DNP3_TYPE_PAIRS[1], RenameSide::Out)
                },
            ],
            modified: vec!["Pump1".into(), "Level".into()],
            outputs: None,
        }
    }

    #[test]
    fn totals_span_all_pairings() {
        let report = report();
        assert_eq!(report.matched(), 2);
        assert_eq!(report.mismatch_count(), 1);
        assert_eq!(report.mismatches().next().unwrap().row, 3);
    }

    #[test]
    fn label_is_out_slash_in_for_either_side() {
        let out_side = PairingReport::empty(DNP3_TYPE_PAIRS[0], RenameSide::Out);
        let in_side = PairingReport::empty(DNP3_TYPE_PAIRS[0], RenameSide::In);
        assert_eq!(out_side.label(), "BinaryOutputs/BinaryInputs");
        assert_eq!(in_side.label(), "BinaryOutputs/BinaryInputs");
        assert_eq!(in_side.target, PointType::BinaryInputs);
        assert_eq!(in_side.reference, PointType::BinaryOutputs);
    }

    #[test]
    fn json_lists_mismatch_keys() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["rows"], 6);
        assert_eq!(json["pairings"][0]["target"], "BinaryOutputs");
        assert_eq!(json["pairings"][0]["mismatches"][0]["row"], 3);
        assert_eq!(
            json["pairings"][0]["mismatches"][0]["key"][0]["column"],
            "DNP3 Address"
        );
        assert!(json["outputs"].is_null());
    }
}
