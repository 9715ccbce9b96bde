//! Standardized API responses.

use ad_core::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use telemetry::{HealthStatus, MetricsSnapshot};
use tracing::error;

/// Acknowledgement for operations without a resource body.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_message: Option<String>,
    pub requests: MetricsSnapshot,
}

/// Error detail: a plain message or per-field diagnostics.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// Error envelope: `{"error": ...}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            response: ErrorResponse {
                error: ErrorDetail::Message(msg.into()),
            },
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            response: ErrorResponse {
                error: ErrorDetail::Fields(errors),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<ad_core::Error> for ApiError {
    fn from(err: ad_core::Error) -> Self {
        match err {
            ad_core::Error::Validation(errors) => ApiError::validation(errors),
            ad_core::Error::InvalidBody(msg) => ApiError::bad_request(msg),
            ad_core::Error::NotFound(msg) => ApiError::not_found(msg),
            ad_core::Error::Conflict(msg) => ApiError::conflict(msg),
            ad_core::Error::Database(_) | ad_core::Error::Internal(_) => {
                error!(error = %err, "Unhandled error");
                ApiError::internal("internal server error")
            }
        }
    }
}
