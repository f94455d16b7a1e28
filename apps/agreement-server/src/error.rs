//! Error types for the agreement server

use agreement_core::AgreementError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures reported with the JSON error body.
///
/// Generation outcomes are not errors here; a rejected or failed
/// `AgreementResult` is returned as-is with a matching status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidDate(String),

    #[error("Unsupported document type: {0}")]
    UnsupportedDocumentType(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidDate(_) => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            ApiError::UnsupportedDocumentType(_) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_DOCUMENT_TYPE")
            }
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AgreementError> for ApiError {
    fn from(err: AgreementError) -> Self {
        match err {
            AgreementError::InvalidDate(_) => ApiError::InvalidDate(err.to_string()),
            AgreementError::MissingInput(_) => ApiError::InvalidRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
