//! FileSystem port - abstraction over file I/O operations
//!
//! The purge engine only ever reads metadata files, lists trash subareas,
//! inspects directory ownership/permission bits, and removes entries.
//! This trait exposes exactly those primitives so the domain layer can
//! run against the local disk or an in-memory double.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, remembering which path it happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// What kind of node a path points at, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Symlink,
    Other,
}

/// The subset of `lstat(2)` the trash directory rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    /// Owner user id
    pub uid: u32,
    /// Permission bits including setuid/setgid/sticky
    pub mode: u32,
}

impl FileStat {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == FileKind::Symlink
    }

    pub fn is_sticky(&self) -> bool {
        self.mode & 0o1000 != 0
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory, for tests
pub trait FileSystem {
    /// Read a whole file as UTF-8 text
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Check whether anything (including a dangling symlink) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// List the entry names of a directory.
    ///
    /// Fails with `FsError::NotFound` when the directory is missing.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<OsString>>;

    /// Inspect `path` without following a trailing symlink
    fn stat(&self, path: &Path) -> Option<FileStat>;

    /// Remove a file or a whole directory tree; it is an error if nothing is there
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove a file or directory tree, tolerating its absence
    fn remove_if_exists(&self, path: &Path) -> FsResult<()> {
        if self.exists(path) {
            self.remove(path)
        } else {
            Ok(())
        }
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<OsString>> {
        (**self).list_dir(path)
    }

    fn stat(&self, path: &Path) -> Option<FileStat> {
        (**self).stat(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }

    fn remove_if_exists(&self, path: &Path) -> FsResult<()> {
        (**self).remove_if_exists(path)
    }
}
