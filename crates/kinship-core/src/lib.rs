//! # kinship-core
//!
//! Foundation crate for the Kinship native module.
//! Defines the domain model (`User`, `Address`), the relatives rule, the
//! module facade, the host-facing boundary shapes, and the error taxonomy.
//! The NAPI bridge crate depends on this and nothing else domain-specific.

pub mod boundary;
pub mod errors;
pub mod models;
pub mod module;
pub mod relatives;

// Re-export the most commonly used types at the crate root.
pub use errors::{KinshipError, KinshipResult};
pub use models::{Address, User};
pub use module::Module;
