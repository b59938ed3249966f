//! Purge Use Case
//!
//! Orchestrates the purge: scanner -> lister -> policy -> trashcan.
//! Each trash directory is fully drained (entries, then orphans) before the
//! next one is visited.

use tracing::{debug, info};

use crate::config::TrashEnvironment;
use crate::domain::entities::TrashDir;
use crate::domain::policies::{DeletionPolicy, Verdict};
use crate::domain::ports::FileSystem;
use crate::domain::services::{TrashDirLister, TrashDirScanner};

use super::options::{PurgeOptions, PurgeTarget};
use super::result::PurgeReport;
use super::trashcan::Trashcan;

/// Purge use case - permanently deletes trashed items
pub struct PurgeUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> PurgeUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new purge use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Execute the purge.
    ///
    /// Never fails: removal errors are collected in the report.
    pub fn execute(&self, env: &TrashEnvironment, options: &PurgeOptions) -> PurgeReport {
        let mut report = PurgeReport::new();

        match &options.target {
            PurgeTarget::TrashDir(path) => {
                self.purge_trash_dir(&TrashDir::explicit(path.clone()), &options.policy, &mut report);
            }
            PurgeTarget::AllTrashDirs => {
                for trash_dir in TrashDirScanner::new(&self.fs, env).scan() {
                    self.purge_trash_dir(&trash_dir, &options.policy, &mut report);
                }
            }
        }

        report
    }

    /// Purge one trash directory: entries first, then orphans.
    pub fn purge_trash_dir(
        &self,
        trash_dir: &TrashDir,
        policy: &DeletionPolicy,
        report: &mut PurgeReport,
    ) {
        info!(
            path = %trash_dir.path().display(),
            kind = %trash_dir.kind(),
            "purging trash directory"
        );
        report.add_trash_dir(trash_dir.path().to_path_buf());

        let lister = TrashDirLister::new(&self.fs);
        let trashcan = Trashcan::new(&self.fs);

        for entry in lister.entries(trash_dir) {
            match policy.evaluate(&self.fs, &entry) {
                Verdict::Delete => {
                    let failures = trashcan.delete_entry(&entry);
                    if failures.is_empty() {
                        debug!(path = %entry.path().display(), "purged entry");
                        report.add_deleted(entry.path().to_path_buf());
                    }
                    for failure in failures {
                        report.add_failure(failure);
                    }
                }
                Verdict::Retain(reason) => {
                    debug!(path = %entry.path().display(), %reason, "keeping entry");
                    report.add_retained(entry.path().to_path_buf(), reason);
                }
            }
        }

        for orphan in lister.orphans(trash_dir) {
            match trashcan.delete_orphan(&orphan) {
                Ok(()) => {
                    debug!(path = %orphan.path().display(), "purged orphan payload");
                    report.add_orphan_deleted(orphan.path().to_path_buf());
                }
                Err(failure) => report.add_failure(failure),
            }
        }
    }
}
