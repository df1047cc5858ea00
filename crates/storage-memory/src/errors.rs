//! Storage-specific error types for the in-memory store.
//!
//! These errors are converted to the storage-agnostic types defined in
//! `spendwise_core` before being returned to callers.

use spendwise_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    Duplicate(String),
}

impl<T> From<std::sync::PoisonError<T>> for StorageError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        StorageError::LockPoisoned(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::LockPoisoned(msg) => Error::Database(DatabaseError::Internal(msg)),
            StorageError::NotFound(id) => Error::Database(DatabaseError::NotFound(id)),
            StorageError::Duplicate(id) => Error::Database(DatabaseError::UniqueViolation(id)),
        }
    }
}
