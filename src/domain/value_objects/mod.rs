//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod age_threshold;
mod deletion_date;

pub use age_threshold::AgeThreshold;
pub use deletion_date::{DeletionDate, DELETION_DATE_FORMAT};
