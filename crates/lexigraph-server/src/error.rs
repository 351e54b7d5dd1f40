//! HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
}

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller supplied a missing, empty or malformed value
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the configured size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Anything else; the detail is logged, not returned
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<lexigraph_core::Error> for ApiError {
    fn from(err: lexigraph_core::Error) -> Self {
        match err {
            lexigraph_core::Error::Internal(detail) => Self::Internal(detail),
            invalid => Self::BadRequest(invalid.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest(message) | Self::PayloadTooLarge(message) => {
                tracing::warn!("Rejected request: {}", message)
            }
            Self::Internal(detail) => tracing::error!("Request failed: {}", detail),
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                message: self.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
