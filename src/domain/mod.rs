//! Domain Layer
//!
//! Trash layout rules and purge decisions, expressed against ports.
//!
//! ## Structure
//!
//! - `entities/` - Trash directories, trashinfo entries, orphan payloads
//! - `value_objects/` - Age threshold, deletion date
//! - `services/` - Trashinfo parser, directory lister, directory scanner
//! - `policies/` - Top trash dir rules, deletion policy
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Everything touching the disk goes through `FileSystem`
//! 2. **Derived links** - A payload path is always computed from its trashinfo path

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
