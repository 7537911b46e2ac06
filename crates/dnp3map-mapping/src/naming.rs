//! Variable naming convention

use serde::{Deserialize, Serialize};

/// Prefix marking a global variable in the SCADA export
pub const DEFAULT_PREFIX: &str = "@GV.";

/// Suffix marking the function-block-bound shadow of a tag
pub const DEFAULT_SUFFIX: &str = "_fb";

/// Prefix and suffix applied to variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    /// Marker stripped from the start of a name before it is emitted
    pub prefix: String,
    /// Appended to renamed variables
    pub suffix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl NamingConvention {
    /// Remove one leading prefix, if present
    pub fn strip_prefix<'a>(&self, name: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return name;
        }
        name.strip_prefix(self.prefix.as_str()).unwrap_or(name)
    }

    /// `name` with the suffix appended
    pub fn suffixed(&self, name: &str) -> String {
        format!("{name}{}", self.suffix)
    }
}
