use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for reported figures
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Budget category holding income records
pub const INCOME_BUDGET_CATEGORY: &str = "Income";

/// Budget category holding discretionary spending
pub const PURCHASE_BUDGET_CATEGORY: &str = "Purchase";

/// Flat per-day allowance used when no other policy is configured
pub const DEFAULT_DAILY_ALLOWANCE: Decimal = dec!(68.59);

/// Days in a budget week
pub const DAYS_IN_WEEK: u32 = 7;
