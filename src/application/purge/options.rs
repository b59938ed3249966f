//! Purge options

use std::path::PathBuf;

use crate::domain::policies::DeletionPolicy;

/// Which trash directories a run visits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PurgeTarget {
    /// Home trash plus every accepted per-volume trash
    #[default]
    AllTrashDirs,
    /// Only this directory, without validation
    TrashDir(PathBuf),
}

impl PurgeTarget {
    /// Whether the run needs the list of mounted volumes
    pub fn scans_volumes(&self) -> bool {
        matches!(self, PurgeTarget::AllTrashDirs)
    }
}

/// Options for the purge command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeOptions {
    pub target: PurgeTarget,
    pub policy: DeletionPolicy,
}

impl PurgeOptions {
    /// Create new purge options
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to one directory (None = all trash directories)
    pub fn with_trash_dir(mut self, trash_dir: Option<PathBuf>) -> Self {
        self.target = match trash_dir {
            Some(path) => PurgeTarget::TrashDir(path),
            None => PurgeTarget::AllTrashDirs,
        };
        self
    }

    /// Set the deletion policy
    pub fn with_policy(mut self, policy: DeletionPolicy) -> Self {
        self.policy = policy;
        self
    }
}
