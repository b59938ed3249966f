//! Deletion date value object
//!
//! Trashinfo files record local time without a timezone, e.g.
//! `DeletionDate=2024-03-10T14:05:09`.

use chrono::NaiveDateTime;

/// `strftime` pattern of the `DeletionDate` value
pub const DELETION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// When an item was moved to the trash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeletionDate(NaiveDateTime);

impl DeletionDate {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Parse a `DeletionDate` value. Returns `None` on any deviation from the format.
    pub fn parse(value: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(value, DELETION_DATE_FORMAT)
            .ok()
            .map(Self)
    }

    pub fn at(&self) -> NaiveDateTime {
        self.0
    }

    /// Strictly earlier than `cutoff`
    pub fn is_before(&self, cutoff: NaiveDateTime) -> bool {
        self.0 < cutoff
    }
}

impl std::fmt::Display for DeletionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DELETION_DATE_FORMAT))
    }
}
