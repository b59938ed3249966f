//! Trashinfo entries and orphan payloads
//!
//! A trashinfo file `<trash>/info/<name>.trashinfo` describes the payload
//! `<trash>/files/<name>`. The payload path is never stored; it is always
//! derived from the trashinfo path.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use super::trash_dir::FILES_DIR;

/// File name suffix of metadata files
pub const TRASHINFO_SUFFIX: &str = ".trashinfo";

/// Name of the trashinfo file that would describe a payload called `payload_name`.
pub fn trashinfo_name_for(payload_name: &OsStr) -> OsString {
    let mut name = payload_name.to_os_string();
    name.push(TRASHINFO_SUFFIX);
    name
}

/// Payload name for a trashinfo file name.
///
/// `None` if the name lacks the suffix or is nothing but the suffix: a bare
/// `.trashinfo` would otherwise map onto the whole `files/` subarea.
pub fn payload_name_of(trashinfo_name: &OsStr) -> Option<&OsStr> {
    trashinfo_name
        .as_bytes()
        .strip_suffix(TRASHINFO_SUFFIX.as_bytes())
        .filter(|stem| !stem.is_empty())
        .map(OsStr::from_bytes)
}

/// One metadata file inside a trash directory's `info/` subarea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashInfoEntry {
    path: PathBuf,
}

impl TrashInfoEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the `.trashinfo` file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the payload this entry describes.
    ///
    /// `<trash>/info/<name>.trashinfo` maps to `<trash>/files/<name>`.
    pub fn payload_path(&self) -> PathBuf {
        let trash_dir = self
            .path
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        let file_name = self.path.file_name().unwrap_or_default();
        let payload_name = payload_name_of(file_name).unwrap_or(file_name);
        trash_dir.join(FILES_DIR).join(payload_name)
    }
}

/// A payload in `files/` that has no trashinfo file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanPayload {
    path: PathBuf,
}

impl OrphanPayload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
