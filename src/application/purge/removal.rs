//! Error-reporting removal adapter
//!
//! Wraps the two raw removal primitives. A failure is turned into a
//! `RemovalFailure` value for the caller to collect; it never aborts the run.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{FileSystem, FsError};

/// A removal that the operating system refused
#[derive(Debug)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub error: FsError,
}

impl std::fmt::Display for RemovalFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot remove {}", self.path.display())
    }
}

impl std::error::Error for RemovalFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Removal primitives that report failures as values
pub struct ReportingRemover<'a, FS: FileSystem> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem> ReportingRemover<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Remove `path`; a missing path is a failure.
    pub fn remove(&self, path: &Path) -> Result<(), RemovalFailure> {
        self.fs.remove(path).map_err(|error| Self::failure(path, error))
    }

    /// Remove `path` if anything is there.
    pub fn remove_if_exists(&self, path: &Path) -> Result<(), RemovalFailure> {
        self.fs
            .remove_if_exists(path)
            .map_err(|error| Self::failure(path, error))
    }

    fn failure(path: &Path, error: FsError) -> RemovalFailure {
        debug!(path = %path.display(), %error, "removal failed");
        RemovalFailure {
            path: path.to_path_buf(),
            error,
        }
    }
}
