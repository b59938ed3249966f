//! Run configuration
//!
//! Everything the scan depends on that comes from outside the process:
//! where the home trash lives, who we are, and which volumes are mounted.
//!
//! ## Environment variables
//!
//! - `XDG_DATA_HOME` / `HOME` - locate the home trash directory
//! - `TRASH_EMPTY_TEST_VOLUMES` - `:`-separated volume roots that replace the
//!   system mount table (test isolation)

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::infrastructure::fs::home_trash_dir;
use crate::infrastructure::MountTable;

/// Environment variable that replaces mount table enumeration.
///
/// Set it to an empty string to scan no volumes at all.
pub const TEST_VOLUMES_VAR: &str = "TRASH_EMPTY_TEST_VOLUMES";

/// Snapshot of the process environment relevant to trash discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrashEnvironment {
    /// Home trash directory, if one could be resolved
    pub home_trash: Option<PathBuf>,
    /// Real user id of the current process
    pub uid: u32,
    /// Volume roots in mount order
    pub volumes: Vec<PathBuf>,
}

impl TrashEnvironment {
    /// Build from the real process environment.
    ///
    /// Volumes are only enumerated when `scan_volumes` is set.
    pub fn from_env(scan_volumes: bool) -> Self {
        let system_volumes = scan_volumes.then_some(system_volumes as fn() -> Vec<PathBuf>);
        Self::from_lookup(|key| std::env::var_os(key), current_uid(), system_volumes)
    }

    /// Build from arbitrary lookups.
    ///
    /// With `system_volumes` set to `None` no volumes are resolved at all.
    /// Otherwise it is only consulted when the test override is absent.
    pub fn from_lookup<F, V>(lookup: F, uid: u32, system_volumes: Option<V>) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
        V: FnOnce() -> Vec<PathBuf>,
    {
        let volumes = match (system_volumes, lookup(TEST_VOLUMES_VAR)) {
            (None, _) => Vec::new(),
            (Some(_), Some(list)) => std::env::split_paths(&list)
                .filter(|path| !path.as_os_str().is_empty())
                .collect(),
            (Some(system_volumes), None) => system_volumes(),
        };

        Self {
            home_trash: home_trash_dir(&lookup),
            uid,
            volumes,
        }
    }

    pub fn home_trash(&self) -> Option<&Path> {
        self.home_trash.as_deref()
    }
}

/// Real user id of the calling process.
pub fn current_uid() -> u32 {
    // SAFETY: getuid(2) has no preconditions and cannot fail.
    unsafe { libc::getuid() }
}

fn system_volumes() -> Vec<PathBuf> {
    match MountTable::system() {
        Ok(table) => table.into_mount_points(),
        Err(err) => {
            warn!(error = %err, "cannot enumerate volumes; only the home trash will be purged");
            Vec::new()
        }
    }
}
