//! Common test utilities for trash-empty CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated home, XDG data dir and fake volumes
//! - Assertion macros: `assert_exists!`, `assert_gone!`

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
