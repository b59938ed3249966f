//! Deletion Policy
//!
//! Chosen once per run from the command line and applied to every entry.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::entities::TrashInfoEntry;
use crate::domain::ports::FileSystem;
use crate::domain::services::parse_deletion_date;
use crate::domain::value_objects::{AgeThreshold, DeletionDate};

/// Why an entry was left in the trash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetainReason {
    /// Deleted on or after the cutoff
    TooRecent(DeletionDate),
    /// No usable `DeletionDate` in the trashinfo file
    NoDeletionDate,
    /// The trashinfo file could not be read
    Unreadable,
}

impl std::fmt::Display for RetainReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetainReason::TooRecent(date) => write!(f, "deleted at {}", date),
            RetainReason::NoDeletionDate => write!(f, "no deletion date"),
            RetainReason::Unreadable => write!(f, "unreadable trashinfo"),
        }
    }
}

/// Outcome of applying a policy to one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Delete,
    Retain(RetainReason),
}

impl Verdict {
    pub fn is_delete(&self) -> bool {
        matches!(self, Verdict::Delete)
    }
}

/// Which entries a run purges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionPolicy {
    /// Purge every entry without looking at it
    #[default]
    Unconditional,
    /// Purge entries deleted strictly before `cutoff`
    OlderThan {
        threshold: AgeThreshold,
        cutoff: NaiveDateTime,
    },
}

impl DeletionPolicy {
    /// Age-gated policy with the cutoff fixed at `now - threshold`.
    pub fn older_than(threshold: AgeThreshold, now: NaiveDateTime) -> Self {
        DeletionPolicy::OlderThan {
            threshold,
            cutoff: threshold.cutoff(now),
        }
    }

    /// Unconditional when no threshold was given.
    pub fn from_threshold(threshold: Option<AgeThreshold>, now: NaiveDateTime) -> Self {
        match threshold {
            Some(threshold) => Self::older_than(threshold, now),
            None => DeletionPolicy::Unconditional,
        }
    }

    pub fn threshold(&self) -> Option<AgeThreshold> {
        match self {
            DeletionPolicy::Unconditional => None,
            DeletionPolicy::OlderThan { threshold, .. } => Some(*threshold),
        }
    }

    /// Decide for an entry, reading its trashinfo file only when the policy needs it.
    pub fn evaluate<FS: FileSystem>(&self, fs: &FS, entry: &TrashInfoEntry) -> Verdict {
        if let DeletionPolicy::Unconditional = self {
            return Verdict::Delete;
        }

        match fs.read(entry.path()) {
            Ok(contents) => self.judge(&contents),
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "cannot read trashinfo");
                Verdict::Retain(RetainReason::Unreadable)
            }
        }
    }

    /// Decide from trashinfo contents.
    pub fn judge(&self, contents: &str) -> Verdict {
        let cutoff = match self {
            DeletionPolicy::Unconditional => return Verdict::Delete,
            DeletionPolicy::OlderThan { cutoff, .. } => *cutoff,
        };

        match parse_deletion_date(contents) {
            Some(date) if date.is_before(cutoff) => Verdict::Delete,
            Some(date) => Verdict::Retain(RetainReason::TooRecent(date)),
            None => Verdict::Retain(RetainReason::NoDeletionDate),
        }
    }
}
