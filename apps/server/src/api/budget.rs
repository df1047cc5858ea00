use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    api::shared::{check_day, check_month, check_year, today_in},
    error::ApiResult,
    main_lib::AppState,
    models::BudgetReport,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use spendwise_core::constants::DISPLAY_DECIMAL_PRECISION;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BudgetQuery {
    /// Reference day, defaults to the current day in the reporting timezone.
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SavedQuery {
    pub year: Option<i32>,
    pub today: Option<NaiveDate>,
}

/// Resolves the `(year, month)` of a period query against the current day.
fn resolve_period(state: &AppState, query: &PeriodQuery) -> ApiResult<(i32, u32)> {
    let today = today_in(state.timezone);
    let year = check_year(query.year.unwrap_or_else(|| today.year()))?;
    let month = check_month(query.month.unwrap_or_else(|| today.month()))?;
    Ok((year, month))
}

#[utoipa::path(get, path="/api/v1/budget", params(BudgetQuery), responses((status=200, body = BudgetReport), (status=400)))]
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BudgetQuery>,
) -> ApiResult<Json<BudgetReport>> {
    let today = check_day(query.today.unwrap_or_else(|| today_in(state.timezone)))?;
    let report = state
        .budget_service
        .build_budget_report(today, &state.allowance_policy)?;
    Ok(Json(BudgetReport::from(report)))
}

#[utoipa::path(get, path="/api/v1/summary", params(PeriodQuery), responses((status=200, description = "Totals by budget category"), (status=400)))]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<HashMap<String, Decimal>>> {
    let (year, month) = resolve_period(&state, &query)?;
    let totals = state.budget_service.summary(year, month)?;
    Ok(Json(totals))
}

#[utoipa::path(get, path="/api/v1/per-diem", params(PeriodQuery), responses((status=200, body = f64), (status=400)))]
pub async fn get_per_diem(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<Decimal>> {
    let (year, month) = resolve_period(&state, &query)?;
    let per_diem = state
        .budget_service
        .per_diem(year, month, &state.allowance_policy)?;
    Ok(Json(per_diem.round_dp(DISPLAY_DECIMAL_PRECISION)))
}

#[utoipa::path(get, path="/api/v1/saved", params(SavedQuery), responses((status=200, body = f64), (status=400)))]
pub async fn get_saved(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SavedQuery>,
) -> ApiResult<Json<Decimal>> {
    let today = check_day(query.today.unwrap_or_else(|| today_in(state.timezone)))?;
    let year = check_year(query.year.unwrap_or_else(|| today.year()))?;
    let saved = state
        .budget_service
        .total_saved(year, today, &state.allowance_policy)?;
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget", get(get_budget))
        .route("/summary", get(get_summary))
        .route("/per-diem", get(get_per_diem))
        .route("/saved", get(get_saved))
}
