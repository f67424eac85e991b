//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use batchsort_domain::DispatchError;

/// Body sent with every `400 Bad Request`.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";

/// Body sent with every `500 Internal Server Error`. Details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error while sorting batch";

/// Errors surfaced at the HTTP boundary.
///
/// Both variants answer with a plain-text body and never carry
/// `sorted_arrays` or `time_ns`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body could not be decoded into `{"to_sort": [[int]]}`.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// A sort task failed. Unreachable with the standard sorter.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::MalformedRequest(reason) => {
                tracing::debug!(%reason, "rejecting malformed request");
                (status, INVALID_PAYLOAD_MESSAGE).into_response()
            }
            ApiError::Dispatch(err) => {
                // Log full error details; clients only get the generic message
                tracing::error!(error = %err, "batch dispatch failed");
                (status, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
