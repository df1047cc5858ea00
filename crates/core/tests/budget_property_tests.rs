//! Property-based integration tests for the budget engine.
//!
//! These tests check the calculator, window and grouping invariants over
//! random inputs, using `proptest` for case generation.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use spendwise_core::budget::{calculate, group_by_budget_category, BudgetWindow};
use spendwise_core::records::Record;
use spendwise_core::utils::time_utils::{days_in_month, next_month, previous_month};

// =============================================================================
// Generators
// =============================================================================

/// Generates an amount with two fractional digits.
fn arb_amount(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (-max_cents..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a window length and a valid position inside it.
fn arb_window() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=366).prop_flat_map(|total| (1u32..=total, Just(total)))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=366).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
            .or_else(|| NaiveDate::from_yo_opt(year, 365))
            .unwrap()
    })
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_amount(1_000_000),
        prop_oneof![
            Just("Income".to_string()),
            Just("Purchase".to_string()),
            Just("Bills".to_string()),
        ],
        arb_date(),
    )
        .prop_map(|(amount, budget_category, date)| {
            let stamp = date.and_hms_opt(12, 0, 0).unwrap();
            Record {
                id: format!("{}-{}", budget_category, date),
                amount,
                date: Utc.from_utc_datetime(&stamp),
                category: budget_category.clone(),
                budget_category,
                budget_calculation: true,
                business: None,
                description: None,
                created_at: stamp,
                updated_at: stamp,
            }
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Savings are exact for two-digit amounts: `current_day * allowance - spent`.
    #[test]
    fn prop_saved_is_linear(
        spent in arb_amount(10_000_000),
        allowance in arb_amount(100_000),
        (current_day, total_days) in arb_window()
    ) {
        let result = calculate(spent, current_day, total_days, allowance).unwrap();
        prop_assert_eq!(result.saved, Decimal::from(current_day) * allowance - spent);
        prop_assert_eq!(result.total, spent);
    }

    /// With nothing spent the average is zero and savings equal the elapsed allowance.
    #[test]
    fn prop_zero_spending(
        allowance in arb_amount(100_000),
        (current_day, total_days) in arb_window()
    ) {
        let result = calculate(Decimal::ZERO, current_day, total_days, allowance).unwrap();
        prop_assert_eq!(result.per_day, Decimal::ZERO);
        prop_assert_eq!(result.saved, Decimal::from(current_day) * allowance);
    }

    /// On the last day the remaining allowance is the whole unspent budget.
    #[test]
    fn prop_last_day_left_equals_saved(
        spent in arb_amount(10_000_000),
        allowance in arb_amount(100_000),
        total_days in 1u32..=366
    ) {
        let result = calculate(spent, total_days, total_days, allowance).unwrap();
        prop_assert_eq!(result.left_per_day, result.saved);
    }

    /// Every statistic carries at most two fractional digits.
    #[test]
    fn prop_results_are_rounded(
        spent in arb_amount(10_000_000),
        allowance in arb_amount(100_000),
        (current_day, total_days) in arb_window()
    ) {
        let result = calculate(spent, current_day, total_days, allowance).unwrap();
        for value in [result.total, result.per_day, result.left_per_day, result.saved] {
            prop_assert!(value.scale() <= 2, "{} has scale {}", value, value.scale());
        }
    }

    /// Day positions outside the window are rejected.
    #[test]
    fn prop_out_of_window_day_is_rejected(
        spent in arb_amount(1_000_000),
        total_days in 1u32..=366,
        overshoot in 1u32..100
    ) {
        prop_assert!(calculate(spent, 0, total_days, Decimal::ONE).is_err());
        prop_assert!(calculate(spent, total_days + overshoot, total_days, Decimal::ONE).is_err());
    }

    /// Month stepping wraps across year boundaries and is reversible.
    #[test]
    fn prop_month_stepping_round_trips(year in 1900i32..2200, month in 1u32..=12) {
        let (prev_year, prev_month) = previous_month(year, month).unwrap();
        prop_assert!((1..=12).contains(&prev_month));
        prop_assert_eq!(next_month(prev_year, prev_month).unwrap(), (year, month));
        let days = days_in_month(year, month).unwrap();
        prop_assert!((28..=31).contains(&days));
    }

    /// Windows always contain the day they were built for.
    #[test]
    fn prop_windows_contain_today(today in arb_date()) {
        for window in [
            BudgetWindow::week(today).unwrap(),
            BudgetWindow::month(today).unwrap(),
            BudgetWindow::year(today).unwrap(),
        ] {
            prop_assert!(window.current_day >= 1);
            prop_assert!(window.current_day <= window.total_days);
            prop_assert!(window.after < today);
            let span = (today - window.after).num_days();
            prop_assert_eq!(span, i64::from(window.current_day));
        }
        prop_assert_eq!(BudgetWindow::year(today).unwrap().total_days, today.ordinal());
    }

    /// Grouping preserves the grand total and keeps only observed categories.
    #[test]
    fn prop_grouping_preserves_total(records in proptest::collection::vec(arb_record(), 0..60)) {
        let totals = group_by_budget_category(&records);
        let grand_total: Decimal = records.iter().map(|r| r.amount).sum();
        prop_assert_eq!(totals.values().copied().sum::<Decimal>(), grand_total);
        for category in totals.keys() {
            prop_assert!(records.iter().any(|r| &r.budget_category == category));
        }
    }
}
