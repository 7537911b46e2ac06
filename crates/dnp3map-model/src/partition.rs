//! Table partitioning
//!
//! [`partition_by`] splits a table into one group per distinct value of a
//! column. [`PointGroups`] builds on it to give each group its DNP3 role,
//! checked against the declared `Type` values instead of trusting the order
//! in which categories happen to appear in the export.

use crate::point_type::PointType;
use crate::table::PointTable;
use crate::{Error, Result};
use tracing::{debug, warn};

/// Split a table by the values of one column.
///
/// Groups are ordered by the first occurrence of their value and keep the
/// relative order of their rows, so concatenating them reproduces the rows of
/// `table`. Values are compared with surrounding whitespace removed. An empty
/// table yields no groups.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] when `table` has rows but no such column.
pub fn partition_by(table: &PointTable, column: &str) -> Result<Vec<PointTable>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let col = table.require_column(column)?;

    let mut keys: Vec<&str> = Vec::new();
    let mut groups: Vec<PointTable> = Vec::new();
    for record in &table.rows {
        let value = record.trimmed(col);
        let slot = match keys.iter().position(|k| *k == value) {
            Some(slot) => slot,
            None => {
                keys.push(value);
                groups.push(table.empty_like());
                keys.len() - 1
            }
        };
        groups[slot].push(record.clone());
    }

    debug!(column, group_count = groups.len(), "Partitioned table");
    Ok(groups)
}

/// Groups of a mapping table keyed by their DNP3 point type.
#[derive(Debug, Clone)]
pub struct PointGroups {
    headers: Vec<String>,
    groups: Vec<(PointType, PointTable)>,
}

impl PointGroups {
    /// Partition `table` by `type_column` and assign every group its role.
    ///
    /// Every group value has to name one of the four point types. With
    /// `require_all`, each of the four must also be present; otherwise an
    /// absent category is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPointType`] for a `Type` value that is not a
    /// DNP3 category, [`Error::MissingPointType`] for an absent category when
    /// `require_all` is set, and [`Error::MissingColumn`] when the type column
    /// does not exist.
    pub fn from_table(table: &PointTable, type_column: &str, require_all: bool) -> Result<Self> {
        let col = table.require_column(type_column)?;
        let mut groups = Vec::new();

        for group in partition_by(table, type_column)? {
            let Some(first) = group.rows.first() else {
                continue;
            };
            let point_type = first
                .get(col)
                .parse::<PointType>()
                .map_err(|value| Error::unknown_point_type(first.index, value))?;
            debug!(%point_type, rows = group.len(), "Assigned point group");
            groups.push((point_type, group));
        }

        for point_type in PointType::ALL {
            if groups.iter().any(|(t, _)| *t == point_type) {
                continue;
            }
            if require_all {
                return Err(Error::MissingPointType { point_type });
            }
            warn!(%point_type, "Point type absent from mapping table, treating as empty");
        }

        Ok(Self {
            headers: table.headers.clone(),
            groups,
        })
    }

    /// The group for a point type, if the table contained any such rows
    pub fn get(&self, point_type: PointType) -> Option<&PointTable> {
        self.groups
            .iter()
            .find(|(t, _)| *t == point_type)
            .map(|(_, g)| g)
    }

    /// Mutable access to the group for a point type
    pub fn get_mut(&mut self, point_type: PointType) -> Option<&mut PointTable> {
        self.groups
            .iter_mut()
            .find(|(t, _)| *t == point_type)
            .map(|(_, g)| g)
    }

    /// Split borrow of a target group and its reference group.
    ///
    /// An absent reference yields an empty table so every target row is
    /// reported as unmatched. Returns `None` when the target is absent or both
    /// roles name the same type.
    pub fn pair_mut(
        &mut self,
        target: PointType,
        reference: PointType,
    ) -> Option<(&mut PointTable, PointTable)> {
        if target == reference {
            return None;
        }
        let reference = self
            .get(reference)
            .cloned()
            .unwrap_or_else(|| PointTable::new(self.headers.clone()));
        self.get_mut(target).map(|t| (t, reference))
    }

    /// Point types present, in split order
    pub fn types(&self) -> Vec<PointType> {
        self.groups.iter().map(|(t, _)| *t).collect()
    }

    /// Number of groups present
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the source table had no rows
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Concatenate all groups back into one table, in split order
    pub fn into_table(self) -> PointTable {
        let mut table = PointTable::new(self.headers);
        for (_, group) in self.groups {
            table.extend(group);
        }
        table
    }
}
