//! Trashcan - the two-file delete transaction
//!
//! An entry is purged payload first, then trashinfo. Both removals are
//! attempted even if the first one fails; nothing is rolled back.

use crate::domain::entities::{OrphanPayload, TrashInfoEntry};
use crate::domain::ports::FileSystem;

use super::removal::{RemovalFailure, ReportingRemover};

/// Executes purges against a file system
pub struct Trashcan<'a, FS: FileSystem> {
    remover: ReportingRemover<'a, FS>,
}

impl<'a, FS: FileSystem> Trashcan<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self {
            remover: ReportingRemover::new(fs),
        }
    }

    /// Remove the derived payload (may be absent), then the trashinfo file (must exist).
    ///
    /// Returns every failure; an empty vector means the entry is gone.
    pub fn delete_entry(&self, entry: &TrashInfoEntry) -> Vec<RemovalFailure> {
        let payload = self.remover.remove_if_exists(&entry.payload_path());
        let trashinfo = self.remover.remove(entry.path());
        [payload, trashinfo]
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }

    /// Remove a payload that has no trashinfo file.
    pub fn delete_orphan(&self, orphan: &OrphanPayload) -> Result<(), RemovalFailure> {
        self.remover.remove(orphan.path())
    }
}
