//! trash-empty - purge engine for freedesktop.org trash directories
//!
//! Walks the home trash and every per-volume trash directory, decides per
//! trashed item whether it may be permanently deleted, and deletes payload
//! and trashinfo file together. A single unremovable file never aborts a run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PurgeOptions, PurgeReport, PurgeTarget, PurgeUseCase, RemovalFailure};
pub use config::TrashEnvironment;
pub use domain::entities::{OrphanPayload, TrashDir, TrashDirKind, TrashInfoEntry};
pub use domain::policies::{DeletionPolicy, TopTrashDirRules, Verdict};
pub use domain::services::{parse_deletion_date, TrashDirLister, TrashDirScanner};
pub use domain::value_objects::{AgeThreshold, DeletionDate};
pub use error::{PurgeError, PurgeResult};
pub use infrastructure::{LocalFs, MountTable};
