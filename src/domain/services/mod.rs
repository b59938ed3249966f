//! Domain Services
//!
//! - `trashinfo_parser` - extracts the deletion date from a trashinfo file
//! - `trash_dir_lister` - enumerates entries and orphans of one trash directory
//! - `trash_dir_scanner` - discovers trash directories on home and volumes

mod trash_dir_lister;
mod trash_dir_scanner;
mod trashinfo_parser;

pub use trash_dir_lister::TrashDirLister;
pub use trash_dir_scanner::{legacy_candidate, top_level_candidate, TrashDirScanner, TrashDirs};
pub use trashinfo_parser::{parse_deletion_date, DELETION_DATE_KEY, TRASH_INFO_HEADER};
