use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_core::budget as core_budget;
use spendwise_core::records as core_records;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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

impl From<core_records::Record> for Record {
    fn from(r: core_records::Record) -> Self {
        Self {
            id: r.id,
            amount: r.amount,
            date: r.date,
            category: r.category,
            budget_category: r.budget_category,
            budget_calculation: r.budget_calculation,
            business: r.business,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn default_budget_calculation() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

impl From<NewRecord> for core_records::NewRecord {
    fn from(r: NewRecord) -> Self {
        Self {
            id: r.id,
            amount: r.amount,
            date: r.date,
            category: r.category,
            budget_category: r.budget_category,
            budget_calculation: r.budget_calculation,
            business: r.business,
            description: r.description,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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

impl From<RecordUpdate> for core_records::RecordUpdate {
    fn from(r: RecordUpdate) -> Self {
        Self {
            id: r.id,
            amount: r.amount,
            date: r.date,
            category: r.category,
            budget_category: r.budget_category,
            budget_calculation: r.budget_calculation,
            business: r.business,
            description: r.description,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub total: Decimal,
    pub per_day: Decimal,
    pub left_per_day: Decimal,
    pub saved: Decimal,
}

impl From<core_budget::BudgetResult> for BudgetResult {
    fn from(b: core_budget::BudgetResult) -> Self {
        Self {
            total: b.total,
            per_day: b.per_day,
            left_per_day: b.left_per_day,
            saved: b.saved,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub week: BudgetResult,
    pub month: BudgetResult,
    pub year: BudgetResult,
}

impl From<core_budget::BudgetReport> for BudgetReport {
    fn from(r: core_budget::BudgetReport) -> Self {
        Self {
            week: r.week.into(),
            month: r.month.into(),
            year: r.year.into(),
        }
    }
}
