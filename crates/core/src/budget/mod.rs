//! Budget module - window statistics, category aggregation and savings.

mod budget_aggregator;
mod budget_calculator;
mod budget_model;
mod budget_service;
mod budget_traits;


pub use budget_aggregator::{
    category_total, group_by_budget_category, net_from_totals, net_income, round_totals,
    sum_by_category, summary,
};
pub use budget_calculator::calculate;
pub use budget_model::{AllowancePolicy, BudgetReport, BudgetResult, BudgetWindow, WindowKind};
pub use budget_service::BudgetService;
pub use budget_traits::BudgetServiceTrait;
