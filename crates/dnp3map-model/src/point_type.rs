//! DNP3 point categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four point categories a mapping table may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    BinaryInputs,
    BinaryOutputs,
    AnalogInputs,
    AnalogOutputs,
}

impl PointType {
    /// All categories in the order a SCADA export lists them
    pub const ALL: [PointType; 4] = [
        PointType::BinaryInputs,
        PointType::BinaryOutputs,
        PointType::AnalogInputs,
        PointType::AnalogOutputs,
    ];

    /// The literal `Type` cell value for this category
    pub fn as_str(self) -> &'static str {
        match self {
            PointType::BinaryInputs => "BinaryInputs",
            PointType::BinaryOutputs => "BinaryOutputs",
            PointType::AnalogInputs => "AnalogInputs",
            PointType::AnalogOutputs => "AnalogOutputs",
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        PointType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

/// Which side of a pairing receives the renamed variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameSide {
    /// Rename the output points (`BinaryOutputs`, `AnalogOutputs`)
    #[default]
    Out,
    /// Rename the input points (`BinaryInputs`, `AnalogInputs`)
    In,
}

/// Static association between an output category and its input category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePairing {
    pub output: PointType,
    pub input: PointType,
}

/// The pairings reconciled on every run, binary first
pub const DNP3_TYPE_PAIRS: [TypePairing; 2] = [
    TypePairing {
        output: PointType::BinaryOutputs,
        input: PointType::BinaryInputs,
    },
    TypePairing {
        output: PointType::AnalogOutputs,
        input: PointType::AnalogInputs,
    },
];

impl TypePairing {
    /// `(target, reference)` categories for the given rename side
    pub fn roles(self, side: RenameSide) -> (PointType, PointType) {
        match side {
            RenameSide::Out => (self.output, self.input),
            RenameSide::In => (self.input, self.output),
        }
    }

    /// Short label used in logs and reports, e.g. `BinaryOutputs/BinaryInputs`
    pub fn label(self) -> String {
        format!("{}/{}", self.output, self.input)
    }
}
