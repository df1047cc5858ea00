//! Record repository and service traits.
//!
//! These traits define the contract for record operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::records_model::{NewRecord, Record, RecordFilter, RecordUpdate};
use crate::errors::Result;

/// Trait defining the contract for the record store.
///
/// Reads return materialized sequences; aggregation happens in the core.
#[async_trait]
pub trait RecordRepositoryTrait: Send + Sync {
    /// Creates a new record, assigning an id when none is given.
    async fn create(&self, new_record: NewRecord) -> Result<Record>;

    /// Replaces the mutable fields of an existing record.
    async fn update(&self, record_update: RecordUpdate) -> Result<Record>;

    /// Deletes a record by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, record_id: &str) -> Result<usize>;

    /// Retrieves a record by its ID.
    fn get_by_id(&self, record_id: &str) -> Result<Record>;

    /// Lists every record, newest first.
    fn list(&self) -> Result<Vec<Record>>;

    /// Returns the records matching `filter`.
    fn query(&self, filter: &RecordFilter) -> Result<Vec<Record>>;
}

/// Trait defining the contract for record service operations.
#[async_trait]
pub trait RecordServiceTrait: Send + Sync {
    fn get_records(&self) -> Result<Vec<Record>>;
    fn get_record(&self, record_id: &str) -> Result<Record>;
    async fn create_record(&self, new_record: NewRecord) -> Result<Record>;
    async fn update_record(&self, record_update: RecordUpdate) -> Result<Record>;
    async fn delete_record(&self, record_id: &str) -> Result<()>;
}
