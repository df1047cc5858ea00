use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use log::{debug, error};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::budget_aggregator;
use super::budget_calculator::calculate;
use super::budget_model::{
    AllowancePolicy, BudgetReport, BudgetResult, BudgetWindow, WindowKind,
};
use super::budget_traits::BudgetServiceTrait;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, PURCHASE_BUDGET_CATEGORY};
use crate::errors::Result;
use crate::records::{RecordFilter, RecordRepositoryTrait};
use crate::utils::time_utils::{
    days_in_month, last_day_of_month, months_elapsed_in_year, previous_month,
};

pub struct BudgetService {
    repository: Arc<dyn RecordRepositoryTrait>,
    timezone: Tz,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn RecordRepositoryTrait>, timezone: Tz) -> Self {
        BudgetService {
            repository,
            timezone,
        }
    }

    /// Purchases counted toward the budget, dated after `after` and up to `until`.
    fn spent_between(&self, after: NaiveDate, until: NaiveDate) -> Result<Decimal> {
        let filter = RecordFilter::new(self.timezone)
            .after(after)
            .until(until)
            .budget_category(PURCHASE_BUDGET_CATEGORY)
            .budget_calculation(true);
        let records = self.repository.query(&filter).map_err(|e| {
            error!("Error querying purchases after {}: {:?}", after, e);
            e
        })?;
        Ok(records.iter().map(|r| r.amount).sum())
    }

    fn allowance_for(&self, policy: &AllowancePolicy, year: i32, month: u32) -> Result<Decimal> {
        match policy {
            AllowancePolicy::Fixed { per_day } => Ok(*per_day),
            AllowancePolicy::DerivedFromPreviousPeriod => {
                let (prev_year, prev_month) = previous_month(year, month)?;
                let basis = self.net_income(prev_year, prev_month)?;
                let days = days_in_month(year, month)?;
                Ok(basis / Decimal::from(days))
            }
        }
    }
}

impl BudgetServiceTrait for BudgetService {
    fn build_budget_report(
        &self,
        today: NaiveDate,
        policy: &AllowancePolicy,
    ) -> Result<BudgetReport> {
        debug!("Building budget report for {}", today);

        let window = |kind: WindowKind| -> Result<BudgetResult> {
            self.calculate_window(&BudgetWindow::for_kind(kind, today)?, today, policy)
        };

        Ok(BudgetReport {
            week: window(WindowKind::Week)?,
            month: window(WindowKind::Month)?,
            year: window(WindowKind::Year)?,
        })
    }

    fn calculate_window(
        &self,
        window: &BudgetWindow,
        today: NaiveDate,
        policy: &AllowancePolicy,
    ) -> Result<BudgetResult> {
        let spent = self.spent_between(window.after, today)?;
        let allowance = self.allowance_for(policy, today.year(), today.month())?;
        debug!(
            "{:?} window: day {} of {}, spent {}, allowance {}",
            window.kind, window.current_day, window.total_days, spent, allowance
        );
        calculate(spent, window.current_day, window.total_days, allowance)
    }

    fn total_saved(
        &self,
        year: i32,
        today: NaiveDate,
        policy: &AllowancePolicy,
    ) -> Result<Decimal> {
        let months = months_elapsed_in_year(year, today);
        let mut saved = Decimal::zero();

        for month in 1..=months {
            let total_days = days_in_month(year, month)?;
            let in_progress = year == today.year() && month == today.month();
            let current_day = if in_progress { today.day() } else { total_days };
            let until = if in_progress {
                today
            } else {
                last_day_of_month(year, month)?
            };
            let (prev_year, prev_month) = previous_month(year, month)?;

            let spent = self.spent_between(last_day_of_month(prev_year, prev_month)?, until)?;
            let allowance = self.allowance_for(policy, year, month)?;
            let result = calculate(spent, current_day, total_days, allowance)?;
            debug!("Saved in {}-{:02}: {}", year, month, result.saved);
            saved += result.saved;
        }

        Ok(saved.round_dp(DISPLAY_DECIMAL_PRECISION))
    }

    fn per_diem(&self, year: i32, month: u32, policy: &AllowancePolicy) -> Result<Decimal> {
        self.allowance_for(policy, year, month)
    }

    fn net_income(&self, year: i32, month: u32) -> Result<Decimal> {
        let filter = RecordFilter::new(self.timezone)
            .in_month(year, month)
            .budget_calculation(true);
        let records = self.repository.query(&filter)?;
        Ok(budget_aggregator::net_income(
            &records,
            self.timezone,
            year,
            Some(month),
            &[PURCHASE_BUDGET_CATEGORY],
        ))
    }

    fn summary(&self, year: i32, month: u32) -> Result<HashMap<String, Decimal>> {
        let filter = RecordFilter::new(self.timezone).in_month(year, month);
        let records = self.repository.query(&filter)?;
        let totals = budget_aggregator::summary(&records, self.timezone, year, Some(month));
        Ok(budget_aggregator::round_totals(totals))
    }
}
