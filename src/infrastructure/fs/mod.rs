//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
#[cfg(test)]
pub(crate) mod memory;

pub use home::home_trash_dir;
pub use local::LocalFs;
