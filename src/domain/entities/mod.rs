//! Domain Entities
//!
//! - `TrashDir` - a trash root with `info/` and `files/` subareas
//! - `TrashInfoEntry` - one `.trashinfo` metadata file and its derived payload
//! - `OrphanPayload` - a payload with no metadata file

mod trash_dir;
mod trashinfo;

pub use trash_dir::{TrashDir, TrashDirKind, FILES_DIR, INFO_DIR};
pub use trashinfo::{
    payload_name_of, trashinfo_name_for, OrphanPayload, TrashInfoEntry, TRASHINFO_SUFFIX,
};
