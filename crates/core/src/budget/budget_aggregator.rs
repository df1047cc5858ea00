//! Grouping of records by budget category.
//!
//! Every sum coalesces to zero: a category without records is simply absent
//! from the returned map and reads as zero through [`category_total`].

use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, INCOME_BUDGET_CATEGORY};
use crate::records::{Record, RecordFilter};

/// Sums record amounts per budget category, without filtering.
pub fn group_by_budget_category<'a, I>(records: I) -> HashMap<String, Decimal>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for record in records {
        *totals
            .entry(record.budget_category.clone())
            .or_insert(Decimal::ZERO) += record.amount;
    }
    totals
}

fn period_filter(tz: Tz, year: i32, month: Option<u32>) -> RecordFilter {
    match month {
        Some(month) => RecordFilter::new(tz).in_month(year, month),
        None => RecordFilter::new(tz).in_year(year),
    }
}

/// Per-category totals of the budget-relevant records of a year or month.
pub fn sum_by_category(
    records: &[Record],
    tz: Tz,
    year: i32,
    month: Option<u32>,
) -> HashMap<String, Decimal> {
    let filter = period_filter(tz, year, month).budget_calculation(true);
    group_by_budget_category(records.iter().filter(|r| filter.matches(r)))
}

/// Per-category totals of every record of a year or month, for reporting.
///
/// Unlike [`sum_by_category`] this ignores the `budget_calculation` flag.
pub fn summary(
    records: &[Record],
    tz: Tz,
    year: i32,
    month: Option<u32>,
) -> HashMap<String, Decimal> {
    let filter = period_filter(tz, year, month);
    group_by_budget_category(records.iter().filter(|r| filter.matches(r)))
}

/// Total of one category, zero when absent.
pub fn category_total(totals: &HashMap<String, Decimal>, category: &str) -> Decimal {
    totals.get(category).copied().unwrap_or(Decimal::ZERO)
}

/// Income minus every other category not listed in `exclude`.
pub fn net_from_totals(totals: &HashMap<String, Decimal>, exclude: &[&str]) -> Decimal {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for (category, total) in totals {
        if category == INCOME_BUDGET_CATEGORY {
            income += *total;
        } else if !exclude.contains(&category.as_str()) {
            expenses += *total;
        }
    }
    income - expenses
}

/// Net budget-relevant cash flow of a period.
pub fn net_income(
    records: &[Record],
    tz: Tz,
    year: i32,
    month: Option<u32>,
    exclude: &[&str],
) -> Decimal {
    net_from_totals(&sum_by_category(records, tz, year, month), exclude)
}

pub fn round_totals(totals: HashMap<String, Decimal>) -> HashMap<String, Decimal> {
    totals
        .into_iter()
        .map(|(category, total)| (category, total.round_dp(DISPLAY_DECIMAL_PRECISION)))
        .collect()
}
