use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spendwise_core::errors::{DatabaseError, Error as CoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Database(DatabaseError::NotFound(_)) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                CoreError::Database(DatabaseError::UniqueViolation(_)) => {
                    (StatusCode::CONFLICT, e.to_string())
                }
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use spendwise_core::errors::{CalculatorError, ValidationError};

    #[test]
    fn test_status_mapping() {
        let not_found: ApiError = CoreError::Database(DatabaseError::NotFound("x".into())).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let invalid: ApiError =
            CoreError::Validation(ValidationError::InvalidInput("bad".into())).into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let calculation: ApiError = CoreError::Calculation(CalculatorError::InvalidWindow {
            current_day: 0,
            total_days: 7,
        })
        .into();
        assert_eq!(
            calculation.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let bad_query = ApiError::BadRequest("month out of range".into());
        assert_eq!(bad_query.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
