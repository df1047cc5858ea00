use rust_decimal::Decimal;

use super::budget_model::BudgetResult;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{CalculatorError, Result};

/// Computes the budget statistics of a window.
///
/// * `total_spent` - spending in the window so far
/// * `current_day` - 1-indexed position of today within the window
/// * `total_days` - length of the window in days
/// * `per_day_allowance` - budget for a single day
///
/// The remaining allowance is spread over the remaining days including today,
/// hence `total_days + 1 - current_day`.
pub fn calculate(
    total_spent: Decimal,
    current_day: u32,
    total_days: u32,
    per_day_allowance: Decimal,
) -> Result<BudgetResult> {
    if current_day == 0 || current_day > total_days {
        return Err(CalculatorError::InvalidWindow {
            current_day,
            total_days,
        }
        .into());
    }

    let elapsed = Decimal::from(current_day);
    let remaining = Decimal::from(total_days + 1 - current_day);
    let budget = Decimal::from(total_days) * per_day_allowance;

    Ok(BudgetResult {
        total: total_spent.round_dp(DISPLAY_DECIMAL_PRECISION),
        per_day: (total_spent / elapsed).round_dp(DISPLAY_DECIMAL_PRECISION),
        left_per_day: ((budget - total_spent) / remaining).round_dp(DISPLAY_DECIMAL_PRECISION),
        saved: (elapsed * per_day_allowance - total_spent).round_dp(DISPLAY_DECIMAL_PRECISION),
    })
}
