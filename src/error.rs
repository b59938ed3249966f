//! Error types for trash-empty
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type PurgeResult<T> = Result<T, PurgeError>;

/// Main error type for library operations
#[derive(Error, Debug)]
pub enum PurgeError {
    /// Age threshold is not a non-negative whole number of days
    #[error("invalid age threshold '{value}': expected a non-negative number of days")]
    InvalidThreshold { value: String },

    /// The kernel mount table could not be read
    #[error("cannot read mount table {path}: {source}")]
    MountTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
