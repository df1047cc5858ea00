//! Record domain models.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{local_date_from_utc, DEFAULT_REPORTING_TZ};

fn default_budget_calculation() -> bool {
    true
}

/// Domain model representing a dated income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    pub budget_category: String,
    pub budget_calculation: bool,
    pub business: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record {
    /// Calendar day of the record in the reporting timezone.
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        local_date_from_utc(self.date, tz)
    }
}

/// Input model for creating a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    pub budget_category: String,
    #[serde(default = "default_budget_calculation")]
    pub budget_calculation: bool,
    #[serde(default)]
    pub business: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewRecord {
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Record category cannot be empty".to_string(),
            )));
        }
        if self.budget_category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget category cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for replacing the mutable fields of an existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    #[serde(default)]
    pub id: Option<String>,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    pub budget_category: String,
    #[serde(default = "default_budget_calculation")]
    pub budget_calculation: bool,
    #[serde(default)]
    pub business: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RecordUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Record ID is required for updates".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Record category cannot be empty".to_string(),
            )));
        }
        if self.budget_category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget category cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Query accepted by the record store.
///
/// Date bounds are compared against the record's calendar day in `timezone`.
/// `after` is exclusive and `until` is inclusive.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    pub timezone: Tz,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub after: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub budget_calculation: Option<bool>,
    pub budget_category: Option<String>,
    pub exclude_budget_categories: Vec<String>,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_REPORTING_TZ)
    }
}

impl RecordFilter {
    pub fn new(timezone: Tz) -> Self {
        RecordFilter {
            timezone,
            year: None,
            month: None,
            after: None,
            until: None,
            budget_calculation: None,
            budget_category: None,
            exclude_budget_categories: Vec::new(),
        }
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Restricts to one calendar month; `month` is ignored unless a year is also set.
    pub fn in_month(mut self, year: i32, month: u32) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self
    }

    pub fn after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn budget_calculation(mut self, flag: bool) -> Self {
        self.budget_calculation = Some(flag);
        self
    }

    pub fn budget_category(mut self, category: &str) -> Self {
        self.budget_category = Some(category.to_string());
        self
    }

    pub fn excluding(mut self, categories: &[&str]) -> Self {
        self.exclude_budget_categories
            .extend(categories.iter().map(|c| c.to_string()));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        let day = record.local_date(self.timezone);

        if let Some(year) = self.year {
            if day.year() != year {
                return false;
            }
            if let Some(month) = self.month {
                if day.month() != month {
                    return false;
                }
            }
        }
        if let Some(after) = self.after {
            if day <= after {
                return false;
            }
        }
        if let Some(until) = self.until {
            if day > until {
                return false;
            }
        }
        if let Some(flag) = self.budget_calculation {
            if record.budget_calculation != flag {
                return false;
            }
        }
        if let Some(ref category) = self.budget_category {
            if &record.budget_category != category {
                return false;
            }
        }
        !self
            .exclude_budget_categories
            .iter()
            .any(|c| c == &record.budget_category)
    }
}
