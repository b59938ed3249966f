//! Trash directory entity

use std::path::{Path, PathBuf};

/// Subarea holding `.trashinfo` metadata files
pub const INFO_DIR: &str = "info";

/// Subarea holding the trashed payloads
pub const FILES_DIR: &str = "files";

/// Where a trash directory was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashDirKind {
    /// The user's home trash (`$XDG_DATA_HOME/Trash`)
    Home,
    /// Per-user directory below a shared `<volume>/.Trash`
    TopLevel,
    /// `<volume>/.Trash-<uid>`
    Legacy,
    /// Named explicitly on the command line
    Explicit,
}

impl std::fmt::Display for TrashDirKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrashDirKind::Home => write!(f, "home"),
            TrashDirKind::TopLevel => write!(f, "top-level"),
            TrashDirKind::Legacy => write!(f, "legacy"),
            TrashDirKind::Explicit => write!(f, "explicit"),
        }
    }
}

/// A trash directory, optionally tied to the volume it lives on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashDir {
    path: PathBuf,
    volume: Option<PathBuf>,
    kind: TrashDirKind,
}

impl TrashDir {
    /// The home trash directory. Always trusted.
    pub fn home(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            volume: None,
            kind: TrashDirKind::Home,
        }
    }

    /// A directory the user asked for by name. Not validated.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            volume: None,
            kind: TrashDirKind::Explicit,
        }
    }

    /// A per-volume trash directory that already passed validation.
    pub fn on_volume(path: impl Into<PathBuf>, volume: impl Into<PathBuf>, kind: TrashDirKind) -> Self {
        Self {
            path: path.into(),
            volume: Some(volume.into()),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn volume(&self) -> Option<&Path> {
        self.volume.as_deref()
    }

    pub fn kind(&self) -> TrashDirKind {
        self.kind
    }

    pub fn info_dir(&self) -> PathBuf {
        self.path.join(INFO_DIR)
    }

    pub fn files_dir(&self) -> PathBuf {
        self.path.join(FILES_DIR)
    }
}
