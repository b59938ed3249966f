//! Trashinfo parser
//!
//! ```text
//! [Trash Info]
//! Path=/home/u/report.pdf
//! DeletionDate=2024-03-10T14:05:09
//! ```
//!
//! Only the deletion date matters to the purge engine. Anything unexpected
//! (missing header, missing key, malformed date) yields `None`; these files
//! are writable by any application, so malformed input is normal.

use crate::domain::value_objects::DeletionDate;

/// First line of every trashinfo file
pub const TRASH_INFO_HEADER: &str = "[Trash Info]";

/// Key holding the deletion timestamp
pub const DELETION_DATE_KEY: &str = "DeletionDate";

/// Extract the deletion date from trashinfo contents.
///
/// The first well-formed `DeletionDate` inside the `[Trash Info]` group wins.
pub fn parse_deletion_date(contents: &str) -> Option<DeletionDate> {
    let mut lines = contents.lines().map(|line| line.trim_end_matches('\r'));

    if lines.next()? != TRASH_INFO_HEADER {
        return None;
    }

    lines
        .take_while(|line| !line.starts_with('['))
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| *key == DELETION_DATE_KEY)
        .find_map(|(_, value)| DeletionDate::parse(value))
}
