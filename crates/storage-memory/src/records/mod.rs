//! In-memory storage implementation for records.

mod repository;

pub use repository::RecordRepository;
