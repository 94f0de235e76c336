//! API error types with HTTP response mapping.
//!
//! Every error surfaces as a uniform JSON envelope with a timestamp,
//! the numeric status, the status reason phrase, a human message, and
//! (for validation failures) a per-field message map. The error-kind
//! to status mapping is consulted once, here, at the API boundary.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::{DomainError, ValidationErrors};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A create request failed field-level validation.
    Validation(ValidationErrors),
    /// A required query parameter was not supplied.
    MissingParameter(&'static str),
    /// A parameter value did not match any enumeration member.
    InvalidEnumValue {
        param: &'static str,
        value: String,
    },
    /// Resource not found.
    NotFound(String),
    /// Internal server error. The message is logged, never returned.
    Internal(String),
}

/// The uniform error envelope returned for every failed request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    timestamp: DateTime<Utc>,
    status: u16,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<BTreeMap<&'static str, &'static str>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, field_errors) = match self {
            ApiError::Validation(errors) => {
                let fields: BTreeMap<_, _> =
                    errors.iter().map(|e| (e.field, e.message)).collect();
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(fields),
                )
            }
            ApiError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("Required query parameter '{name}' is not present"),
                None,
            ),
            ApiError::InvalidEnumValue { param, value } => (
                StatusCode::BAD_REQUEST,
                format!("Invalid value '{value}' for parameter '{param}'"),
                None,
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown"),
            message,
            field_errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::NotFound(id) => ApiError::NotFound(format!("Order not found: {id}")),
            DomainError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
