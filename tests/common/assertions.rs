//! Custom assertion macros for CLI tests.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a path still exists.
#[macro_export]
macro_rules! assert_exists {
    ($path:expr) => {
        let path = AsRef::<std::path::Path>::as_ref(&$path).to_path_buf();
        assert!(
            std::fs::symlink_metadata(&path).is_ok(),
            "Expected '{}' to exist, but it doesn't.\nFiles found:\n  {}",
            path.display(),
            path.parent()
                .map(|p| $crate::common::list_all_files(p).join("\n  "))
                .unwrap_or_default()
        );
    };
}

/// Assert that a path was removed.
#[macro_export]
macro_rules! assert_gone {
    ($path:expr) => {
        let path = AsRef::<std::path::Path>::as_ref(&$path).to_path_buf();
        assert!(
            std::fs::symlink_metadata(&path).is_err(),
            "Expected '{}' to be removed, but it still exists.",
            path.display()
        );
    };
}
