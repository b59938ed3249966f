//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations and home trash resolution
//! - `mounts` - Mount table enumeration

pub mod fs;
pub mod mounts;

// Re-export for convenience
pub use fs::LocalFs;
pub use mounts::MountTable;
