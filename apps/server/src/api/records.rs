use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{NewRecord, Record, RecordUpdate},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;

#[utoipa::path(get, path="/api/v1/records", responses((status=200, body = [Record])))]
pub async fn list_records(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Record>>> {
    let records = state.record_service.get_records()?;
    Ok(Json(records.into_iter().map(Record::from).collect()))
}

#[utoipa::path(get, path="/api/v1/records/{id}", responses((status=200, body = Record), (status=404)))]
pub async fn get_record(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Record>> {
    let record = state.record_service.get_record(&id)?;
    Ok(Json(Record::from(record)))
}

#[utoipa::path(post, path="/api/v1/records", request_body = NewRecord, responses((status=201, body = Record)))]
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewRecord>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let created = state.record_service.create_record(payload.into()).await?;
    info!("Created record {}", created.id);
    Ok((StatusCode::CREATED, Json(Record::from(created))))
}

#[utoipa::path(put, path="/api/v1/records/{id}", request_body = RecordUpdate, responses((status=200, body = Record), (status=404)))]
pub async fn update_record(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<RecordUpdate>,
) -> ApiResult<Json<Record>> {
    payload.id = Some(id);
    let updated = state.record_service.update_record(payload.into()).await?;
    Ok(Json(Record::from(updated)))
}

#[utoipa::path(delete, path="/api/v1/records/{id}", responses((status=204), (status=404)))]
pub async fn delete_record(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.record_service.delete_record(&id).await?;
    info!("Deleted record {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
}
