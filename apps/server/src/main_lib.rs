use std::sync::Arc;

use crate::config::{Config, LogFormat};
use chrono_tz::Tz;
use spendwise_core::{
    budget::{AllowancePolicy, BudgetService, BudgetServiceTrait},
    records::{RecordRepositoryTrait, RecordService, RecordServiceTrait},
};
use spendwise_storage_memory::records::RecordRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub record_service: Arc<dyn RecordServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub allowance_policy: AllowancePolicy,
    pub timezone: Tz,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let record_repository: Arc<dyn RecordRepositoryTrait> = Arc::new(RecordRepository::new());

    let record_service = Arc::new(RecordService::new(record_repository.clone()));
    let budget_service = Arc::new(BudgetService::new(record_repository, config.timezone));

    tracing::info!(
        "Reporting timezone {}, allowance policy {:?}",
        config.timezone,
        config.allowance_policy
    );

    Ok(Arc::new(AppState {
        record_service,
        budget_service,
        allowance_policy: config.allowance_policy,
        timezone: config.timezone,
    }))
}
