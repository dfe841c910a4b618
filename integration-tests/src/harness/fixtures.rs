use anysweep_core::config::SweepConfig;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .expect("valid fixed timestamp")
}

/// A scratch directory holding one copy of a fixture log, with a config
/// writing every artifact into the same directory.
pub struct Workspace {
    pub dir: TempDir,
    pub log: PathBuf,
    pub config: SweepConfig,
}

impl Workspace {
    pub fn with_fixture(file: &str) -> Self {
        let contents = fs::read_to_string(fixture_path(file)).expect("fixture readable");
        Self::with_contents(file, &contents)
    }

    pub fn with_contents(file: &str, contents: &str) -> Self {
        let dir = tempdir().expect("temp dir");
        let log = dir.path().join(file);
        fs::write(&log, contents).expect("log written");

        let mut config = SweepConfig::default();
        config.output.dir = Some(dir.path().to_path_buf());

        Self { dir, log, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Every file currently in the workspace, by name, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .expect("workspace listable")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
