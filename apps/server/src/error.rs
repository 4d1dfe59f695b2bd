//! API error type and its mapping onto HTTP responses.
//!
//! Every failure leaves the server as the same JSON envelope:
//! `{ "success": false, "error": "<message>" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use finfusion_core::errors::DatabaseError;
use finfusion_core::Error as CoreError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// Client-side problem: bad input, broken references, duplicates.
    BadRequest(String),
    /// Missing or invalid credentials.
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m)
            | ApiError::Unauthorized(m)
            | ApiError::NotFound(m)
            | ApiError::Internal(m) => m,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::Validation(_) | CoreError::Loan(_) | CoreError::ConstraintViolation(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CoreError::Database(DatabaseError::NotFound(_)) => ApiError::NotFound(err.to_string()),
            CoreError::Database(DatabaseError::UniqueViolation(_))
            | CoreError::Database(DatabaseError::ForeignKeyViolation(_)) => {
                ApiError::BadRequest(err.to_string())
            }
            _ => {
                tracing::error!("Internal error: {err}");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Internal error: {err:#}");
        ApiError::Internal("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.message(),
        });
        (self.status(), Json(body)).into_response()
    }
}
