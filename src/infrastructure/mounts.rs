//! Mount table reader
//!
//! Supplies the ordered list of volume roots scanned for per-volume trash
//! directories. Reads the kernel's view in `/proc/self/mounts`, falling
//! back to `/etc/mtab`.

use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;
use std::path::{Path, PathBuf};

use crate::error::{PurgeError, PurgeResult};

const MOUNT_TABLES: [&str; 2] = ["/proc/self/mounts", "/etc/mtab"];

/// Parsed mount table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountTable {
    mount_points: Vec<PathBuf>,
}

impl MountTable {
    /// Load the system mount table.
    pub fn system() -> PurgeResult<Self> {
        let mut last_err = None;
        for table in MOUNT_TABLES {
            match Self::load(Path::new(table)) {
                Ok(mounts) => return Ok(mounts),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| PurgeError::MountTable {
            path: PathBuf::from(MOUNT_TABLES[0]),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }))
    }

    /// Load a mount table in `fstab(5)` layout.
    pub fn load(path: &Path) -> PurgeResult<Self> {
        let contents = std::fs::read(path).map_err(|source| PurgeError::MountTable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &[u8]) -> Self {
        let mount_points = contents
            .split(|b| *b == b'\n')
            .filter_map(|line| {
                let mut fields = line
                    .split(|b| *b == b' ' || *b == b'\t')
                    .filter(|field| !field.is_empty());
                let device = fields.next()?;
                if device.starts_with(b"#") {
                    return None;
                }
                fields.next().map(unescape)
            })
            .collect();
        Self { mount_points }
    }

    pub fn mount_points(&self) -> &[PathBuf] {
        &self.mount_points
    }

    pub fn into_mount_points(self) -> Vec<PathBuf> {
        self.mount_points
    }
}

/// Decode the octal escapes (`\040` for space and friends) used in mount tables.
fn unescape(field: &[u8]) -> PathBuf {
    let mut out = Vec::with_capacity(field.len());
    let mut i = 0;
    while i < field.len() {
        if field[i] == b'\\' && i + 3 < field.len() {
            let digits = &field[i + 1..i + 4];
            if digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
                let value = digits
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                if let Ok(byte) = u8::try_from(value) {
                    out.push(byte);
                    i += 4;
                    continue;
                }
            }
        }
        out.push(field[i]);
        i += 1;
    }
    PathBuf::from(OsString::from_vec(out))
}
