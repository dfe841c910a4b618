//! Output file naming.
//!
//! Both artifacts share one stem, `filtrado_<YYYYMMDD-HHMMSS>_<input file name>.csv`;
//! the report appends `.xlsx` to the full intermediate name.

use chrono::NaiveDateTime;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub intermediate: PathBuf,
    pub report: PathBuf,
}

impl ArtifactNames {
    /// Only the file name of `input` is used, so artifacts land in
    /// `output_dir` whatever directory the log came from.
    pub fn new(input: &Path, output_dir: &Path, started: NaiveDateTime) -> Self {
        let file_name = input
            .file_name()
            .unwrap_or_else(|| OsStr::new("log"))
            .to_string_lossy();

        let stem = format!(
            "filtrado_{}_{}.csv",
            started.format(TIMESTAMP_FORMAT),
            file_name
        );

        Self {
            intermediate: output_dir.join(&stem),
            report: output_dir.join(format!("{stem}.xlsx")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn started() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap()
    }

    #[test]
    fn names_carry_timestamp_and_input_file_name() {
        let names = ArtifactNames::new(Path::new("traffic.log"), Path::new("out"), started());

        assert_eq!(
            names.intermediate,
            PathBuf::from("out/filtrado_20240307-090501_traffic.log.csv")
        );
        assert_eq!(
            names.report,
            PathBuf::from("out/filtrado_20240307-090501_traffic.log.csv.xlsx")
        );
    }

    #[test]
    fn input_directories_are_not_carried_into_the_name() {
        let names = ArtifactNames::new(
            Path::new("/var/log/fw/export.txt"),
            Path::new("."),
            started(),
        );

        assert_eq!(
            names.intermediate,
            PathBuf::from("./filtrado_20240307-090501_export.txt.csv")
        );
    }
}
