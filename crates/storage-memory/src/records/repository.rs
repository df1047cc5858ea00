use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use spendwise_core::records::{NewRecord, Record, RecordFilter, RecordRepositoryTrait, RecordUpdate};
use spendwise_core::Result;
use std::sync::RwLock;
use uuid::Uuid;

use crate::errors::StorageError;

/// Record store backed by a vector behind a read-write lock.
#[derive(Default)]
pub struct RecordRepository {
    records: RwLock<Vec<Record>>,
}

impl RecordRepository {
    pub fn new() -> Self {
        RecordRepository::default()
    }

    fn sorted(mut records: Vec<Record>) -> Vec<Record> {
        records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        records
    }
}

#[async_trait]
impl RecordRepositoryTrait for RecordRepository {
    async fn create(&self, new_record: NewRecord) -> Result<Record> {
        let mut records = self.records.write().map_err(StorageError::from)?;

        let id = match new_record.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        if records.iter().any(|r| r.id == id) {
            return Err(StorageError::Duplicate(id).into());
        }

        let now = Utc::now().naive_utc();
        let record = Record {
            id,
            amount: new_record.amount,
            date: new_record.date,
            category: new_record.category,
            budget_category: new_record.budget_category,
            budget_calculation: new_record.budget_calculation,
            business: new_record.business,
            description: new_record.description,
            created_at: now,
            updated_at: now,
        };
        debug!("Stored record {}", record.id);
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record_update: RecordUpdate) -> Result<Record> {
        let id = record_update.id.unwrap_or_default();
        let mut records = self.records.write().map_err(StorageError::from)?;
        let existing = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StorageError::NotFound(id.clone()))?;

        existing.amount = record_update.amount;
        existing.date = record_update.date;
        existing.category = record_update.category;
        existing.budget_category = record_update.budget_category;
        existing.budget_calculation = record_update.budget_calculation;
        existing.business = record_update.business;
        existing.description = record_update.description;
        existing.updated_at = Utc::now().naive_utc();

        Ok(existing.clone())
    }

    async fn delete(&self, record_id: &str) -> Result<usize> {
        let mut records = self.records.write().map_err(StorageError::from)?;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        Ok(before - records.len())
    }

    fn get_by_id(&self, record_id: &str) -> Result<Record> {
        let records = self.records.read().map_err(StorageError::from)?;
        records
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(record_id.to_string()).into())
    }

    fn list(&self) -> Result<Vec<Record>> {
        let records = self.records.read().map_err(StorageError::from)?;
        Ok(Self::sorted(records.clone()))
    }

    fn query(&self, filter: &RecordFilter) -> Result<Vec<Record>> {
        let records = self.records.read().map_err(StorageError::from)?;
        Ok(Self::sorted(
            records.iter().filter(|r| filter.matches(r)).cloned().collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, TimeZone};
    use rust_decimal_macros::dec;
    use spendwise_core::errors::{DatabaseError, Error};

    fn new_record(day: u32, budget_category: &str) -> NewRecord {
        NewRecord {
            id: None,
            amount: dec!(12.50),
            date: Utc.with_ymd_and_hms(2020, 1, day, 18, 0, 0).unwrap(),
            category: "Groceries".to_string(),
            budget_category: budget_category.to_string(),
            budget_calculation: true,
            business: Some("Corner Store".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let repo = RecordRepository::new();
        let created = repo.create(new_record(3, "Purchase")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.get_by_id(&created.id).unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_with_existing_id_fails() {
        let repo = RecordRepository::new();
        let mut first = new_record(3, "Purchase");
        first.id = Some("rec-1".to_string());
        repo.create(first.clone()).await.unwrap();

        let err = repo.create(first).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = RecordRepository::new();
        repo.create(new_record(2, "Purchase")).await.unwrap();
        repo.create(new_record(9, "Purchase")).await.unwrap();
        repo.create(new_record(5, "Income")).await.unwrap();

        let days: Vec<u32> = repo
            .list()
            .unwrap()
            .iter()
            .map(|r| r.local_date(chrono_tz::UTC).day())
            .collect();
        assert_eq!(days, vec![9, 5, 2]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = RecordRepository::new();
        let created = repo.create(new_record(3, "Purchase")).await.unwrap();

        let updated = repo
            .update(RecordUpdate {
                id: Some(created.id.clone()),
                amount: dec!(99),
                date: created.date,
                category: "Dining".to_string(),
                budget_category: "Purchase".to_string(),
                budget_calculation: false,
                business: None,
                description: Some("team lunch".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.amount, dec!(99));
        assert!(!updated.budget_calculation);
        assert_eq!(updated.business, None);
        assert_eq!(repo.get_by_id(&created.id).unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_record_is_not_found() {
        let repo = RecordRepository::new();
        let err = repo
            .update(RecordUpdate {
                id: Some("missing".to_string()),
                amount: dec!(1),
                date: Utc::now(),
                category: "Misc".to_string(),
                budget_category: "Purchase".to_string(),
                budget_calculation: true,
                business: None,
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_reports_removed_count() {
        let repo = RecordRepository::new();
        let created = repo.create(new_record(3, "Purchase")).await.unwrap();

        assert_eq!(repo.delete(&created.id).await.unwrap(), 1);
        assert_eq!(repo.delete(&created.id).await.unwrap(), 0);
        assert!(repo.get_by_id(&created.id).is_err());
    }

    #[tokio::test]
    async fn test_query_applies_filter() {
        let repo = RecordRepository::new();
        repo.create(new_record(3, "Purchase")).await.unwrap();
        repo.create(new_record(4, "Income")).await.unwrap();
        let mut skipped = new_record(5, "Purchase");
        skipped.budget_calculation = false;
        repo.create(skipped).await.unwrap();

        let filter = RecordFilter::new(chrono_tz::UTC)
            .after(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
            .budget_category("Purchase")
            .budget_calculation(true);
        let found = repo.query(&filter).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].budget_category, "Purchase");
    }
}
