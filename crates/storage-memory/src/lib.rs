//! In-memory storage implementation for Spendwise.
//!
//! This crate implements the record store traits defined in `spendwise-core`
//! on top of a lock-guarded vector. Records live for the lifetime of the
//! process.
//!
//! ```text
//! server (http)
//!       │
//!       ▼
//!  core (budget engine)
//!       │
//!       ▼
//! storage-memory (this crate)
//! ```

pub mod errors;
pub mod records;

pub use errors::StorageError;

// Re-export from spendwise-core for convenience
pub use spendwise_core::errors::{DatabaseError, Error, Result};
