//! Budget domain models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_IN_WEEK;
use crate::errors::Result;
use crate::utils::time_utils::{day_before, day_of_week, days_in_month, week_start};

/// Budget statistics for a single window, rounded for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub total: Decimal,
    pub per_day: Decimal,
    pub left_per_day: Decimal,
    pub saved: Decimal,
}

/// Budget statistics for the week, month and year containing a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub week: BudgetResult,
    pub month: BudgetResult,
    pub year: BudgetResult,
}

/// How the per-day allowance of a period is determined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum AllowancePolicy {
    /// A flat allowance for every day.
    #[serde(rename_all = "camelCase")]
    Fixed { per_day: Decimal },
    /// The previous month's net income spread over the days of the current month.
    DerivedFromPreviousPeriod,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WindowKind {
    Week,
    Month,
    Year,
}

/// Position of a day inside a budget window.
///
/// Spending in the window is every record dated after `after` (exclusive),
/// up to and including the day the window was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWindow {
    pub kind: WindowKind,
    pub current_day: u32,
    pub total_days: u32,
    pub after: NaiveDate,
}

impl BudgetWindow {
    /// Monday-based week containing `today`.
    pub fn week(today: NaiveDate) -> Result<Self> {
        Ok(BudgetWindow {
            kind: WindowKind::Week,
            current_day: day_of_week(today),
            total_days: DAYS_IN_WEEK,
            after: day_before(week_start(today))?,
        })
    }

    /// Calendar month containing `today`.
    pub fn month(today: NaiveDate) -> Result<Self> {
        Ok(BudgetWindow {
            kind: WindowKind::Month,
            current_day: today.day(),
            total_days: days_in_month(today.year(), today.month())?,
            after: day_before(today.with_day(1).unwrap_or(today))?,
        })
    }

    /// Calendar year containing `today`, sized to the days elapsed so far.
    pub fn year(today: NaiveDate) -> Result<Self> {
        Ok(BudgetWindow {
            kind: WindowKind::Year,
            current_day: today.ordinal(),
            total_days: today.ordinal(),
            after: day_before(today.with_ordinal(1).unwrap_or(today))?,
        })
    }

    /// Window of the given kind containing `today`.
    pub fn for_kind(kind: WindowKind, today: NaiveDate) -> Result<Self> {
        match kind {
            WindowKind::Week => Self::week(today),
            WindowKind::Month => Self::month(today),
            WindowKind::Year => Self::year(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_windows_for_each_kind() {
        // Wednesday
        let today = date(2000, 1, 5);

        let week = BudgetWindow::for_kind(WindowKind::Week, today).unwrap();
        assert_eq!(week.kind, WindowKind::Week);
        assert_eq!((week.current_day, week.total_days), (3, 7));
        assert_eq!(week.after, date(2000, 1, 2));

        let month = BudgetWindow::for_kind(WindowKind::Month, today).unwrap();
        assert_eq!((month.current_day, month.total_days), (5, 31));
        assert_eq!(month.after, date(1999, 12, 31));

        let year = BudgetWindow::for_kind(WindowKind::Year, today).unwrap();
        assert_eq!((year.current_day, year.total_days), (5, 5));
        assert_eq!(year.after, date(1999, 12, 31));
    }

    #[test]
    fn test_week_window_may_start_in_previous_month() {
        // Sunday
        let week = BudgetWindow::week(date(2020, 2, 2)).unwrap();
        assert_eq!(week.current_day, 7);
        assert_eq!(week.after, date(2020, 1, 26));
    }
}
