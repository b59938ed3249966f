//! Domain Policies
//!
//! Business rules that decide what gets scanned and what gets purged.

mod deletion_policy;
mod top_trash_dir_rules;

pub use deletion_policy::{DeletionPolicy, RetainReason, Verdict};
pub use top_trash_dir_rules::{Rejection, TopTrashDirRules};
