//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::ffi::OsString;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::domain::ports::{FileKind, FileStat, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Directories are removed recursively; files and symlinks are unlinked.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<OsString>> {
        let entries = std::fs::read_dir(path).map_err(|e| FsError::at(path, e))?;
        entries
            .map(|entry| {
                entry
                    .map(|e| e.file_name())
                    .map_err(|e| FsError::at(path, e))
            })
            .collect()
    }

    fn stat(&self, path: &Path) -> Option<FileStat> {
        let meta = std::fs::symlink_metadata(path).ok()?;
        let file_type = meta.file_type();
        let kind = if file_type.is_symlink() {
            FileKind::Symlink
        } else if file_type.is_dir() {
            FileKind::Dir
        } else if file_type.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        };
        Some(FileStat {
            kind,
            uid: meta.uid(),
            mode: meta.mode(),
        })
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let meta = std::fs::symlink_metadata(path).map_err(|e| FsError::at(path, e))?;
        let result = if meta.file_type().is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        result.map_err(|e| FsError::at(path, e))
    }
}
