//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PurgeUseCase` - Scan trash directories and purge what the policy allows

pub mod purge;

pub use purge::{
    PurgeOptions, PurgeReport, PurgeTarget, PurgeUseCase, RemovalFailure, RetainedEntry,
    Trashcan,
};
