//! Purge result types

use std::path::PathBuf;

use crate::domain::policies::RetainReason;

use super::removal::RemovalFailure;

/// An entry the policy kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedEntry {
    /// Path to the trashinfo file
    pub path: PathBuf,
    pub reason: RetainReason,
}

/// Result of a purge run
#[derive(Debug, Default)]
pub struct PurgeReport {
    /// Trash directories visited, in order
    pub trash_dirs: Vec<PathBuf>,
    /// Trashinfo files purged together with their payloads
    pub deleted: Vec<PathBuf>,
    /// Orphan payloads purged
    pub orphans_deleted: Vec<PathBuf>,
    /// Entries the policy kept
    pub retained: Vec<RetainedEntry>,
    /// Removals the operating system refused
    pub failures: Vec<RemovalFailure>,
}

impl PurgeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trash_dir(&mut self, path: PathBuf) {
        self.trash_dirs.push(path);
    }

    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    pub fn add_orphan_deleted(&mut self, path: PathBuf) {
        self.orphans_deleted.push(path);
    }

    pub fn add_retained(&mut self, path: PathBuf, reason: RetainReason) {
        self.retained.push(RetainedEntry { path, reason });
    }

    pub fn add_failure(&mut self, failure: RemovalFailure) {
        self.failures.push(failure);
    }

    /// Entries and orphans purged
    pub fn total_deleted(&self) -> usize {
        self.deleted.len() + self.orphans_deleted.len()
    }

    /// Check if every attempted removal succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
