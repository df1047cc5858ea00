//! Spendwise Core - Budget computation engine, domain entities, and traits.
//!
//! This crate turns dated, categorized records into week/month/year budget
//! statistics. It is storage-agnostic and defines the record store traits
//! that are implemented by the `storage-memory` crate.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod records;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
