// ============================================================================
// HTTP Error Responses
// Maps the summation error taxonomy onto HTTP statuses
// ============================================================================

use crate::domain::RequestId;
use crate::numeric::SumError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error payload returned to HTTP callers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Correlation identifier for this call
    pub request_id: String,
    /// Human-readable error message
    pub detail: String,
}

/// An error response: HTTP status plus payload.
///
/// Validation failures surface their message directly with a 4xx status;
/// everything else is logged server-side in full and rendered as a generic
/// 5xx message carrying only the correlation id.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Create a 400 Bad Request response.
    pub fn bad_request(request_id: &RequestId, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError {
                request_id: request_id.to_string(),
                detail: detail.into(),
            },
        }
    }

    /// Create a generic 500 Internal Server Error response.
    pub fn internal(request_id: &RequestId) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError {
                request_id: request_id.to_string(),
                detail: format!("Internal error. Request id {}", request_id),
            },
        }
    }

    /// Map a summation error onto the HTTP taxonomy.
    pub fn from_sum_error(request_id: &RequestId, error: &SumError) -> Self {
        match error {
            SumError::InvalidNumber(_) | SumError::EmptyCount | SumError::InvalidCount(_) => {
                Self::bad_request(request_id, error.to_string())
            },
            other => {
                tracing::error!(request_id = %request_id, error = %other, "summation request failed");
                Self::internal(request_id)
            },
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}
