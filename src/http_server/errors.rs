//! # HTTP Adapter Errors
//!
//! Error types for the HTTP layer, and their mapping to status codes.
//! Only store failures and unreadable bodies surface as errors here; an
//! empty result is a normal envelope, never a 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::retrieval::RetrievalError;
use crate::store::StoreErrorCode;

/// Result type for HTTP handlers
pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP adapter errors
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Request body was present but not JSON this endpoint understands
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The lookup behind the request failed in the store
    #[error("{0}")]
    Retrieval(#[from] RetrievalError),
}

impl HttpError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The caller sent something unreadable
            HttpError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            // A refused query is the caller's fault; everything else
            // means the backend cannot answer right now
            HttpError::Retrieval(err) => match err.store_code() {
                StoreErrorCode::RejectedQuery => StatusCode::BAD_REQUEST,
                StoreErrorCode::Unavailable | StoreErrorCode::Timeout => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
            },
        }
    }

    /// Stable string code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            HttpError::InvalidBody(_) => "SHEET_INVALID_BODY",
            HttpError::Retrieval(err) => err.code(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl From<HttpError> for ErrorBody {
    fn from(err: HttpError) -> Self {
        Self {
            code: err.code().to_string(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_invalid_body_is_bad_request() {
        let err = HttpError::InvalidBody("expected an object".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "SHEET_INVALID_BODY");
    }

    #[test]
    fn test_rejected_query_is_bad_request() {
        let err = HttpError::from(RetrievalError::new(
            "sheet1",
            StoreError::rejected_query("unknown operator"),
        ));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unreachable_backend_is_service_unavailable() {
        for store_err in [StoreError::unavailable("down"), StoreError::timeout("slow")] {
            let err = HttpError::from(RetrievalError::new("sheet1", store_err));
            assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[test]
    fn test_body_carries_code_and_message() {
        let err = HttpError::from(RetrievalError::new(
            "sheet1",
            StoreError::unavailable("connection refused"),
        ));
        let body = ErrorBody::from(err);

        assert_eq!(body.code, "SHEET_RETRIEVAL_FAILED");
        assert!(body.error.contains("sheet1"));
        assert!(body.error.contains("connection refused"));
    }
}
