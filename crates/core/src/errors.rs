//! Core error types for the Spendwise budget engine.
//!
//! This module defines storage-agnostic error types. Store-specific errors
//! are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the budget engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Budget calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Storage-agnostic error type for record store operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate id).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Internal/unexpected store error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors raised by the budget calculator.
///
/// These indicate a caller bug (a window that cannot exist), never bad user data.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid budget window: day {current_day} of {total_days}")]
    InvalidWindow { current_day: u32, total_days: u32 },

    #[error("Invalid calendar date: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
