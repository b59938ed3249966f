//! Command handlers for the trash-empty binary

pub mod purge;

pub use purge::cmd_purge;
