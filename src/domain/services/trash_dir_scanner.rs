//! Trash directory scanner
//!
//! Yields the home trash directory first, then for every volume in mount
//! order the `.Trash/<uid>` candidate followed by the `.Trash-<uid>`
//! candidate. Volume candidates are only yielded once `TopTrashDirRules`
//! accepts them. The sequence is lazy: nothing is checked until the caller
//! asks for the next directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::TrashEnvironment;
use crate::domain::entities::{TrashDir, TrashDirKind};
use crate::domain::policies::TopTrashDirRules;
use crate::domain::ports::FileSystem;

/// `<volume>/.Trash/<uid>`
pub fn top_level_candidate(volume: &Path, uid: u32) -> PathBuf {
    volume.join(".Trash").join(uid.to_string())
}

/// `<volume>/.Trash-<uid>`
pub fn legacy_candidate(volume: &Path, uid: u32) -> PathBuf {
    volume.join(format!(".Trash-{}", uid))
}

/// Discovers trash directories for the current user.
pub struct TrashDirScanner<'a, FS: FileSystem> {
    fs: &'a FS,
    env: &'a TrashEnvironment,
}

impl<'a, FS: FileSystem> TrashDirScanner<'a, FS> {
    pub fn new(fs: &'a FS, env: &'a TrashEnvironment) -> Self {
        Self { fs, env }
    }

    pub fn scan(&self) -> TrashDirs<'a, FS> {
        TrashDirs {
            rules: TopTrashDirRules::new(self.fs, self.env.uid),
            uid: self.env.uid,
            home: self.env.home_trash().map(TrashDir::home),
            volumes: self.env.volumes.iter(),
            candidates: Vec::new().into_iter(),
        }
    }
}

/// Lazy sequence of accepted trash directories
pub struct TrashDirs<'a, FS: FileSystem> {
    rules: TopTrashDirRules<'a, FS>,
    uid: u32,
    home: Option<TrashDir>,
    volumes: std::slice::Iter<'a, PathBuf>,
    candidates: std::vec::IntoIter<(PathBuf, &'a Path, TrashDirKind)>,
}

impl<FS: FileSystem> Iterator for TrashDirs<'_, FS> {
    type Item = TrashDir;

    fn next(&mut self) -> Option<TrashDir> {
        if let Some(home) = self.home.take() {
            return Some(home);
        }

        loop {
            for (path, volume, kind) in self.candidates.by_ref() {
                match self.rules.check(&path, kind) {
                    Ok(()) => return Some(TrashDir::on_volume(path, volume, kind)),
                    Err(reason) => {
                        debug!(path = %path.display(), %kind, %reason, "skipping trash directory")
                    }
                }
            }

            let volume = self.volumes.next()?;
            self.candidates = vec![
                (
                    top_level_candidate(volume, self.uid),
                    volume.as_path(),
                    TrashDirKind::TopLevel,
                ),
                (
                    legacy_candidate(volume, self.uid),
                    volume.as_path(),
                    TrashDirKind::Legacy,
                ),
            ]
            .into_iter();
        }
    }
}
