//! Home trash directory resolution.
//!
//! The home trash lives at `$XDG_DATA_HOME/Trash`, falling back to
//! `$HOME/.local/share/Trash`. When `HOME` is not set either, the
//! platform home from `dirs::home_dir()` is used.
//!
//! The lookup is passed in rather than read from the process environment
//! so tests never have to mutate global state.

use std::ffi::OsString;
use std::path::PathBuf;

/// Resolve the home trash directory from environment lookups.
///
/// Empty variables count as unset.
pub fn home_trash_dir<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(data_home) = non_empty("XDG_DATA_HOME") {
        return Some(PathBuf::from(data_home).join("Trash"));
    }

    non_empty("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|home| home.join(".local/share/Trash"))
}
