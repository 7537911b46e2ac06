//! Timestamped output naming

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// `strftime` pattern of the stamp prefixed to every artifact
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Paths of the three artifacts produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    /// Stamp shared by the three file names
    pub stamp: String,
    /// Updated point map, `<stamp>_map_out.csv`
    pub map: PathBuf,
    /// Structured-text fragment, `<stamp>_ST.txt`
    pub structured_text: PathBuf,
    /// Variable declaration sheet, `<stamp>_var_sheet.csv`
    pub var_sheet: PathBuf,
}

impl OutputPaths {
    /// Artifact paths in `dir` for an explicit stamp
    pub fn for_stamp(dir: impl AsRef<Path>, stamp: impl Into<String>) -> Self {
        let dir = dir.as_ref();
        let stamp = stamp.into();
        Self {
            map: dir.join(format!("{stamp}_map_out.csv")),
            structured_text: dir.join(format!("{stamp}_ST.txt")),
            var_sheet: dir.join(format!("{stamp}_var_sheet.csv")),
            stamp,
        }
    }

    /// Artifact paths stamped with the given time
    pub fn at<Tz>(dir: impl AsRef<Path>, time: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self::for_stamp(dir, time.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Artifact paths stamped with the current local time
    pub fn now(dir: impl AsRef<Path>) -> Self {
        Self::at(dir, &Local::now())
    }

    /// Directory holding the artifacts
    pub fn dir(&self) -> &Path {
        self.map.parent().unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn names_follow_stamp() {
        let paths = OutputPaths::for_stamp("out", "20240131_0905");
        assert_eq!(paths.map, PathBuf::from("out/20240131_0905_map_out.csv"));
        assert_eq!(
            paths.structured_text,
            PathBuf::from("out/20240131_0905_ST.txt")
        );
        assert_eq!(
            paths.var_sheet,
            PathBuf::from("out/20240131_0905_var_sheet.csv")
        );
        assert_eq!(paths.dir(), Path::new("out"));
    }

    #[test]
    fn stamp_is_minute_resolution() {
        let time = Utc.with_ymd_and_hms(2023, 7, 4, 18, 3, 59).unwrap();
        let paths = OutputPaths::at("out", &time);
        assert_eq!(paths.stamp, "20230704_1803");
    }

    #[test]
    fn now_produces_thirteen_character_stamp() {
        let paths = OutputPaths::now("out");
        assert_eq!(paths.stamp.len(), 13);
        assert_eq!(paths.stamp.as_bytes()[8], b'_');
    }
}
