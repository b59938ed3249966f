//! Trash directory lister
//!
//! Two independent queries over one trash directory. Nothing is cached, so
//! each call sees the directory as it is at that moment.

use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::{
    payload_name_of, trashinfo_name_for, OrphanPayload, TrashDir, TrashInfoEntry,
};
use crate::domain::ports::FileSystem;

/// Lists trashinfo entries and orphan payloads of a trash directory.
pub struct TrashDirLister<'a, FS: FileSystem> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem> TrashDirLister<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Every `<name>.trashinfo` file in `info/`, sorted by name.
    ///
    /// A missing `info/` means there are no entries. A file called just
    /// `.trashinfo` describes no payload and is not an entry.
    pub fn entries(&self, trash_dir: &TrashDir) -> Vec<TrashInfoEntry> {
        let info_dir = trash_dir.info_dir();
        self.names_in(&info_dir)
            .into_iter()
            .filter(|name| payload_name_of(name).is_some())
            .map(|name| TrashInfoEntry::new(info_dir.join(name)))
            .collect()
    }

    /// Every payload in `files/` that has no matching trashinfo file, sorted by name.
    pub fn orphans(&self, trash_dir: &TrashDir) -> Vec<OrphanPayload> {
        let info_dir = trash_dir.info_dir();
        let files_dir = trash_dir.files_dir();
        self.names_in(&files_dir)
            .into_iter()
            .filter(|name| !self.fs.exists(&info_dir.join(trashinfo_name_for(name))))
            .map(|name| OrphanPayload::new(files_dir.join(name)))
            .collect()
    }

    fn names_in(&self, dir: &Path) -> Vec<OsString> {
        match self.fs.list_dir(dir) {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(err) if err.is_not_found() => {
                debug!(dir = %dir.display(), "subarea does not exist");
                Vec::new()
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "cannot list trash subarea");
                Vec::new()
            }
        }
    }
}
