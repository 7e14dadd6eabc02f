// ============================================================================
// HTTP Module
// axum wiring that exposes the summation engine as a REST endpoint
// ============================================================================

mod error;
mod handlers;
mod server;

pub use error::{ApiError, ApiErrorResponse};
pub use handlers::{sum_handler, AppState, SumRequest, SumResponse, REQUEST_ID_HEADER};
pub use server::{create_router, serve};
