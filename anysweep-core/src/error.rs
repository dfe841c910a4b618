use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    // Input
    #[error("failed to open log file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Intermediate artifact
    #[error("failed to write intermediate file {path}: {source}")]
    IntermediateWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read intermediate file {path}: {source}")]
    IntermediateRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // Report
    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    // Output location
    #[error("output path {path} is not usable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    pub fn report(path: impl Into<PathBuf>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }

    /// An unreadable input ends the process; every other failure only ends the current run.
    pub fn is_fatal_to_process(&self) -> bool {
        matches!(self, Self::InputOpen { .. })
    }
}
