//! Key-matched row updates
//!
//! Pairs each row of a target group with rows of a reference group that
//! carry the same composite key. The reference group is indexed once, then
//! the target group is scanned in order.

use crate::Result;
use dnp3map_model::{PointRecord, PointTable};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// One `(column, value)` component of a composite key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub column: String,
    pub value: String,
}

/// A target row that did not have exactly one counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Source row index of the target row
    pub row: usize,
    /// Key values of the target row
    pub key: Vec<KeyValue>,
    /// Reference rows sharing the key: zero or more than one
    pub match_count: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self
            .key
            .iter()
            .map(|kv| format!("{}={}", kv.column, kv.value))
            .collect::<Vec<_>>()
            .join(", ");
        if self.match_count == 0 {
            write!(f, "No entry was found for row {} with {key}", self.row)
        } else {
            write!(
                f,
                "{} entries were found for row {} with {key}",
                self.match_count, self.row
            )
        }
    }
}

/// Result of reconciling one target group against its reference group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    /// Original variable names of matched reference rows, in target order
    pub modified: Vec<String>,
    /// Target rows left untouched
    pub mismatches: Vec<Mismatch>,
}

impl MatchOutcome {
    /// Number of target rows that were updated
    pub fn matched(&self) -> usize {
        self.modified.len()
    }

    /// Whether every target row found its counterpart
    pub fn is_complete(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Update every target row that has exactly one counterpart in `reference`.
///
/// Keys are compared field by field on the `key_columns`, with surrounding
/// whitespace removed. A matched row is replaced by
/// `transform(row, counterpart)` and the counterpart's trimmed value in
/// `name_column` is recorded in [`MatchOutcome::modified`]. A row with zero or
/// several counterparts is left unchanged and recorded as a [`Mismatch`];
/// processing continues with the next row.
///
/// # Errors
///
/// Returns an error when a key column or the name column is missing from
/// either table.
pub fn update_if_match<S, F>(
    target: &mut PointTable,
    reference: &PointTable,
    key_columns: &[S],
    name_column: &str,
    transform: F,
) -> Result<MatchOutcome>
where
    S: AsRef<str>,
    F: Fn(&PointRecord, &PointRecord) -> PointRecord,
{
    let target_cols = target.require_columns(key_columns)?;
    let reference_cols = reference.require_columns(key_columns)?;
    let reference_name = reference.require_column(name_column)?;

    let index = index_by_key(reference, &reference_cols);
    debug!(
        target_rows = target.len(),
        reference_rows = reference.len(),
        distinct_keys = index.len(),
        "Indexed reference group"
    );

    let mut outcome = MatchOutcome::default();
    for record in &mut target.rows {
        let key = key_of(record, &target_cols);
        match index.get(&key).map(Vec::as_slice) {
            Some(&[position]) => {
                let counterpart = &reference.rows[position];
                let original = counterpart.trimmed(reference_name).to_string();
                *record = transform(record, counterpart);
                trace!(row = record.index, name = %original, "Matched row");
                outcome.modified.push(original);
            }
            hits => {
                let mismatch = Mismatch {
                    row: record.index,
                    key: key_columns
                        .iter()
                        .zip(key)
                        .map(|(column, value)| KeyValue {
                            column: column.as_ref().trim().to_string(),
                            value,
                        })
                        .collect(),
                    match_count: hits.map_or(0, <[usize]>::len),
                };
                trace!(row = mismatch.row, match_count = mismatch.match_count, "Unmatched row");
                outcome.mismatches.push(mismatch);
            }
        }
    }

    debug!(
        matched = outcome.matched(),
        unmatched = outcome.mismatches.len(),
        "Finished matching group"
    );
    Ok(outcome)
}

fn key_of(record: &PointRecord, columns: &[usize]) -> Vec<String> {
    columns
        .iter()
        .map(|&c| record.trimmed(c).to_string())
        .collect()
}

fn index_by_key(table: &PointTable, columns: &[usize]) -> HashMap<Vec<String>, Vec<usize>> {
    let mut index: HashMap<Vec<String>, Vec<usize>> = HashMap::new();
    for (position, record) in table.rows.iter().enumerate() {
        index.entry(key_of(record, columns)).or_default().push(position);
    }
    index
}
