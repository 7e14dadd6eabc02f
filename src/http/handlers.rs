// ============================================================================
// HTTP Handlers
// Request parsing, validation, and response shaping for the sum endpoint
// ============================================================================

use super::error::ApiErrorResponse;
use crate::domain::{RequestId, Strategy, SumValue};
use crate::engine::SumEngine;
use crate::numeric::NumericInput;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Correlation header honored on incoming requests.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ============================================================================
// DTOs
// ============================================================================

/// JSON request body for `POST /sum`.
#[derive(Debug, Clone, Deserialize)]
pub struct SumRequest {
    /// The values to sum; at least one element is required
    pub numbers: Vec<NumericInput>,

    /// Optional strategy override; the engine default applies otherwise
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

/// JSON response body for `POST /sum`.
///
/// `sum` is a string for precise results and a number for vectorized ones.
#[derive(Debug, Clone, Serialize)]
pub struct SumResponse {
    pub request_id: String,
    pub sum: SumValue,
    pub count: usize,
}

// ============================================================================
// Application State
// ============================================================================

/// Shared application dependencies.
///
/// Handlers share one engine; each request is independent, so no further
/// coordination is needed.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SumEngine>,
}

impl AppState {
    pub fn new(engine: Arc<SumEngine>) -> Self {
        Self { engine }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /sum`: sum the request body's numbers and report the total.
///
/// The correlation id comes from the `X-Request-ID` header when present,
/// otherwise a fresh one is generated; either way it is returned in the
/// response and attached to every log line for the call.
pub async fn sum_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SumRequest>,
) -> Result<Json<SumResponse>, ApiErrorResponse> {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| RequestId::from_string(value.to_string()))
        .unwrap_or_default();

    if payload.numbers.is_empty() {
        return Err(ApiErrorResponse::bad_request(
            &request_id,
            "numbers must contain at least one element",
        ));
    }

    let strategy = payload
        .strategy
        .unwrap_or(state.engine.config().default_strategy);

    let result = state
        .engine
        .sum_with_request(request_id.clone(), &payload.numbers, strategy)
        .map_err(|error| ApiErrorResponse::from_sum_error(&request_id, &error))?;

    Ok(Json(SumResponse {
        request_id: request_id.to_string(),
        sum: result.sum,
        count: result.count,
    }))
}

/// `GET /health`: liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn state() -> AppState {
        AppState::new(Arc::new(SumEngine::with_defaults()))
    }

    fn request(json: &str) -> SumRequest {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_sum_endpoint_mixed_payload() {
        let payload = request(r#"{"numbers": [1, 2, 3.5, "4.2"]}"#);

        let Json(response) = sum_handler(State(state()), HeaderMap::new(), Json(payload))
            .await
            .unwrap();

        // Small request: auto selection runs the precise path
        assert_eq!(response.count, 4);
        assert_eq!(response.sum, SumValue::Precise(rust_decimal::Decimal::new(107, 1)));
        assert!(response.request_id.starts_with("req-"));
    }

    #[tokio::test]
    async fn test_sum_endpoint_honors_correlation_header() {
        let payload = request(r#"{"numbers": [1]}"#);
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("trace-123"));

        let Json(response) = sum_handler(State(state()), headers, Json(payload))
            .await
            .unwrap();

        assert_eq!(response.request_id, "trace-123");
    }

    #[tokio::test]
    async fn test_sum_endpoint_rejects_empty_numbers() {
        let payload = request(r#"{"numbers": []}"#);

        let error = sum_handler(State(state()), HeaderMap::new(), Json(payload))
            .await
            .unwrap_err();

        assert_eq!(error.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(error.error.detail.contains("at least one"));
    }

    #[tokio::test]
    async fn test_sum_endpoint_rejects_invalid_token() {
        let payload = request(r#"{"numbers": ["abc"]}"#);

        let error = sum_handler(State(state()), HeaderMap::new(), Json(payload))
            .await
            .unwrap_err();

        assert_eq!(error.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(error.error.detail.contains("abc"));
    }

    #[tokio::test]
    async fn test_sum_endpoint_explicit_strategy() {
        let payload = request(r#"{"numbers": ["1", "2.5"], "strategy": "precise"}"#);

        let Json(response) = sum_handler(State(state()), HeaderMap::new(), Json(payload))
            .await
            .unwrap();

        assert_eq!(serde_json::to_value(&response.sum).unwrap(), "3.5");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(health_handler().await, "ok");
    }

    #[test]
    fn test_response_serialization_shape() {
        let response = SumResponse {
            request_id: "req-1".to_string(),
            sum: SumValue::Precise(rust_decimal::Decimal::new(107, 1)),
            count: 4,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sum"], "10.7");
        assert_eq!(json["count"], 4);
        assert_eq!(json["request_id"], "req-1");
    }
}
