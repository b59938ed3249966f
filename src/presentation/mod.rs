//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap) into a closed `EmptyCommand`
//! - Exit status accumulation and user-facing messages

pub mod cli;
pub mod output;

pub use cli::{Cli, EmptyCommand};
pub use output::{ExitStatus, EX_OK, EX_USAGE, PROGRAM_NAME};
