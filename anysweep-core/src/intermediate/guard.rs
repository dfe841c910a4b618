use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// RAII handle for the intermediate file.
///
/// Invariants:
/// - The file is removed exactly once, when the guard is dropped, on success
///   and on every error path of the run
/// - With `keep` set the file is left on disk
#[derive(Debug)]
pub struct IntermediateGuard {
    path: PathBuf,
    keep: bool,
}

impl IntermediateGuard {
    pub fn new(path: impl Into<PathBuf>, keep: bool) -> Self {
        Self {
            path: path.into(),
            keep,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for IntermediateGuard {
    fn drop(&mut self) {
        if self.keep || !self.path.exists() {
            return;
        }

        info!(path = %self.path.display(), "removing intermediate CSV");
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove intermediate CSV");
        }
    }
}
