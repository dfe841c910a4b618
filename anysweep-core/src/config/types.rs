use crate::config::ConfigError;
use crate::report::{DEFAULT_NAME, WorkbookOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for a sweep. Every key is optional; an empty file is the
/// built-in behaviour.
///
/// ```toml
/// [report]
/// name = "LIMPIEZA_ANY_"
/// sheet_name = "Sheet1"
/// index_column = true
///
/// [output]
/// dir = "reports"
/// keep_intermediate = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub report: ReportConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Constant written to the NAME column of every row.
    pub name: String,
    pub sheet_name: String,
    pub index_column: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let workbook = WorkbookOptions::default();
        Self {
            name: DEFAULT_NAME.to_string(),
            sheet_name: workbook.sheet_name,
            index_column: workbook.index_column,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for both artifacts. Defaults to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    pub keep_intermediate: bool,
}

impl SweepConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&s).map_err(|e| ConfigError::parse(path, e))
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn output_dir(&self) -> &Path {
        self.output.dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    pub fn workbook_options(&self) -> WorkbookOptions {
        WorkbookOptions {
            sheet_name: self.report.sheet_name.clone(),
            index_column: self.report.index_column,
        }
    }
}
