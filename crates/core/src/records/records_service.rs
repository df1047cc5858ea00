use log::debug;
use std::sync::Arc;

use super::records_model::{NewRecord, Record, RecordUpdate};
use super::records_traits::{RecordRepositoryTrait, RecordServiceTrait};
use crate::errors::{DatabaseError, Result};

/// Service for managing records
pub struct RecordService {
    repository: Arc<dyn RecordRepositoryTrait>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepositoryTrait>) -> Self {
        RecordService { repository }
    }
}

#[async_trait::async_trait]
impl RecordServiceTrait for RecordService {
    fn get_records(&self) -> Result<Vec<Record>> {
        self.repository.list()
    }

    fn get_record(&self, record_id: &str) -> Result<Record> {
        self.repository.get_by_id(record_id)
    }

    async fn create_record(&self, new_record: NewRecord) -> Result<Record> {
        new_record.validate()?;
        debug!(
            "Creating record: {} {} ({})",
            new_record.category, new_record.amount, new_record.budget_category
        );
        self.repository.create(new_record).await
    }

    async fn update_record(&self, record_update: RecordUpdate) -> Result<Record> {
        record_update.validate()?;
        self.repository.update(record_update).await
    }

    async fn delete_record(&self, record_id: &str) -> Result<()> {
        let deleted = self.repository.delete(record_id).await?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound(format!("Record {}", record_id)).into());
        }
        Ok(())
    }
}
