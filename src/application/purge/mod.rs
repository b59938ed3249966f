//! Purge Use Case
//!
//! Orchestrates emptying the trash.
//!
//! This module handles:
//! - Walking every trash directory (or one named directory)
//! - Applying the deletion policy to each trashinfo entry
//! - Removing payload + trashinfo pairs and orphan payloads
//! - Collecting removal failures without aborting the run

mod options;
mod removal;
mod result;
mod trashcan;
mod use_case;

pub use options::{PurgeOptions, PurgeTarget};
pub use removal::{RemovalFailure, ReportingRemover};
pub use result::{PurgeReport, RetainedEntry};
pub use trashcan::Trashcan;
pub use use_case::PurgeUseCase;
