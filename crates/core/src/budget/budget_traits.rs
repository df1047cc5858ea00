use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::budget_model::{AllowancePolicy, BudgetReport, BudgetResult, BudgetWindow};
use crate::errors::Result;

/// Trait for budget computations over the record store.
///
/// Every entry point takes the reference day explicitly; nothing reads the clock.
pub trait BudgetServiceTrait: Send + Sync {
    /// Week, month and year statistics for `today`.
    fn build_budget_report(&self, today: NaiveDate, policy: &AllowancePolicy)
        -> Result<BudgetReport>;

    /// Statistics for a single window.
    fn calculate_window(
        &self,
        window: &BudgetWindow,
        today: NaiveDate,
        policy: &AllowancePolicy,
    ) -> Result<BudgetResult>;

    /// Savings accumulated over the elapsed months of `year`.
    fn total_saved(&self, year: i32, today: NaiveDate, policy: &AllowancePolicy)
        -> Result<Decimal>;

    /// Per-day allowance in effect during the given month.
    fn per_diem(&self, year: i32, month: u32, policy: &AllowancePolicy) -> Result<Decimal>;

    /// Net budget-relevant cash flow of the given month.
    fn net_income(&self, year: i32, month: u32) -> Result<Decimal>;

    /// Raw per-category totals of the given month.
    fn summary(&self, year: i32, month: u32) -> Result<HashMap<String, Decimal>>;
}
