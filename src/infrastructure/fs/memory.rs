//! In-memory file system for unit tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{FileKind, FileStat, FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
struct Node {
    stat: FileStat,
    contents: String,
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    failing: HashSet<PathBuf>,
    removed: Vec<PathBuf>,
}

/// Mock file system for testing
#[derive(Clone)]
pub struct MemoryFs {
    state: Arc<Mutex<State>>,
    uid: u32,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::with_uid(1000)
    }

    /// Files and directories created through the helpers are owned by `uid`.
    pub fn with_uid(uid: u32) -> Self {
        Self {
            state: Arc::default(),
            uid,
        }
    }

    fn insert(&self, path: &Path, kind: FileKind, mode: u32, contents: &str) {
        let mut state = self.state.lock().unwrap();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            if dir.as_os_str().is_empty() {
                break;
            }
            state.nodes.entry(dir.to_path_buf()).or_insert(Node {
                stat: FileStat {
                    kind: FileKind::Dir,
                    uid: self.uid,
                    mode: 0o40700,
                },
                contents: String::new(),
            });
            parent = dir.parent();
        }
        state.nodes.insert(
            path.to_path_buf(),
            Node {
                stat: FileStat {
                    kind,
                    uid: self.uid,
                    mode,
                },
                contents: contents.to_string(),
            },
        );
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) -> &Self {
        self.insert(path.as_ref(), FileKind::File, 0o100600, contents);
        self
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), FileKind::Dir, 0o40700, "");
        self
    }

    pub fn add_symlink(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), FileKind::Symlink, 0o120777, "");
        self
    }

    /// Override the owner and mode of an existing node.
    pub fn set_owner_mode(&self, path: impl AsRef<Path>, uid: u32, mode: u32) -> &Self {
        let mut state = self.state.lock().unwrap();
        if let Some(node) = state.nodes.get_mut(path.as_ref()) {
            node.stat.uid = uid;
            node.stat.mode = mode;
        }
        self
    }

    /// Make every later removal of `path` fail with permission denied.
    pub fn fail_removal_of(&self, path: impl AsRef<Path>) -> &Self {
        let mut state = self.state.lock().unwrap();
        state.failing.insert(path.as_ref().to_path_buf());
        self
    }

    /// Paths removed so far, in order
    pub fn removed(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().removed.clone()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let state = self.state.lock().unwrap();
        match state.nodes.get(path) {
            Some(node) if node.stat.kind == FileKind::File => Ok(node.contents.clone()),
            Some(_) => Err(FsError::Other(format!("not a file: {}", path.display()))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().nodes.contains_key(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<OsString>> {
        let state = self.state.lock().unwrap();
        match state.nodes.get(path) {
            Some(node) if node.stat.is_dir() => {}
            Some(_) => return Err(FsError::Other(format!("not a directory: {}", path.display()))),
            None => return Err(FsError::NotFound(path.to_path_buf())),
        }
        Ok(state
            .nodes
            .keys()
            .filter(|child| child.parent() == Some(path))
            .filter_map(|child| child.file_name().map(|name| name.to_os_string()))
            .collect())
    }

    fn stat(&self, path: &Path) -> Option<FileStat> {
        self.state.lock().unwrap().nodes.get(path).map(|node| node.stat)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if !state.nodes.contains_key(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        state.nodes.retain(|node, _| !node.starts_with(path));
        state.removed.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_creates_parent_dirs() {
        let fs = MemoryFs::new();
        fs.add_file("/t/info/a.trashinfo", "x");

        assert!(fs.stat(Path::new("/t/info")).unwrap().is_dir());
        assert_eq!(
            fs.list_dir(Path::new("/t/info")).unwrap(),
            vec![OsString::from("a.trashinfo")]
        );
    }

    #[test]
    fn memory_fs_remove_takes_the_subtree() {
        let fs = MemoryFs::new();
        fs.add_file("/t/files/dir/nested", "x");

        fs.remove(Path::new("/t/files/dir")).unwrap();

        assert!(!fs.exists(Path::new("/t/files/dir/nested")));
        assert!(fs.exists(Path::new("/t/files")));
    }

    #[test]
    fn memory_fs_failing_removal() {
        let fs = MemoryFs::new();
        fs.add_file("/t/files/a", "x").fail_removal_of("/t/files/a");

        assert!(matches!(
            fs.remove(Path::new("/t/files/a")),
            Err(FsError::PermissionDenied(_))
        ));
        assert!(fs.exists(Path::new("/t/files/a")));
    }
}
