//! Top trash directory rules
//!
//! Per-volume trash directories live on storage other users may write to,
//! so they are only trusted when their permissions look right:
//!
//! - `<volume>/.Trash/<uid>`: the shared `.Trash` must be a real directory
//!   (not a symlink) with the sticky bit set.
//! - `<volume>/.Trash-<uid>`: must be a real directory owned by us.
//!
//! The home trash directory is never checked.

use std::path::Path;

use crate::domain::entities::TrashDirKind;
use crate::domain::ports::{FileStat, FileSystem};

/// Why a candidate trash directory was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing exists at the candidate path
    Missing,
    /// The candidate exists but is not a directory
    NotADirectory,
    /// The shared `.Trash` parent is a symbolic link
    ParentIsSymlink,
    /// The shared `.Trash` parent lacks the sticky bit
    ParentNotSticky,
    /// The candidate belongs to another user
    NotOwned { owner: u32 },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Missing => write!(f, "does not exist"),
            Rejection::NotADirectory => write!(f, "not a directory"),
            Rejection::ParentIsSymlink => write!(f, "parent is a symlink"),
            Rejection::ParentNotSticky => write!(f, "parent lacks the sticky bit"),
            Rejection::NotOwned { owner } => write!(f, "owned by uid {}", owner),
        }
    }
}

/// Validator for per-volume trash directory candidates
pub struct TopTrashDirRules<'a, FS: FileSystem> {
    fs: &'a FS,
    uid: u32,
}

impl<'a, FS: FileSystem> TopTrashDirRules<'a, FS> {
    pub fn new(fs: &'a FS, uid: u32) -> Self {
        Self { fs, uid }
    }

    /// Check a candidate of the given kind. `Home` and `Explicit` are always accepted.
    pub fn check(&self, candidate: &Path, kind: TrashDirKind) -> Result<(), Rejection> {
        match kind {
            TrashDirKind::Home | TrashDirKind::Explicit => Ok(()),
            TrashDirKind::TopLevel => self.check_top_level(candidate),
            TrashDirKind::Legacy => self.check_legacy(candidate),
        }
    }

    pub fn accepts(&self, candidate: &Path, kind: TrashDirKind) -> bool {
        self.check(candidate, kind).is_ok()
    }

    /// `<volume>/.Trash/<uid>`
    pub fn check_top_level(&self, candidate: &Path) -> Result<(), Rejection> {
        self.existing_dir(candidate)?;

        let shared = candidate.parent().ok_or(Rejection::Missing)?;
        let parent = self.fs.stat(shared).ok_or(Rejection::Missing)?;
        if parent.is_symlink() {
            return Err(Rejection::ParentIsSymlink);
        }
        if !parent.is_sticky() {
            return Err(Rejection::ParentNotSticky);
        }
        Ok(())
    }

    /// `<volume>/.Trash-<uid>`
    pub fn check_legacy(&self, candidate: &Path) -> Result<(), Rejection> {
        let stat = self.existing_dir(candidate)?;
        if stat.uid != self.uid {
            return Err(Rejection::NotOwned { owner: stat.uid });
        }
        Ok(())
    }

    fn existing_dir(&self, path: &Path) -> Result<FileStat, Rejection> {
        let stat = self.fs.stat(path).ok_or(Rejection::Missing)?;
        if !stat.is_dir() {
            return Err(Rejection::NotADirectory);
        }
        Ok(stat)
    }
}
