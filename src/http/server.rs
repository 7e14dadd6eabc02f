// ============================================================================
// HTTP Server
// Router construction and serving
// ============================================================================

use super::handlers::{health_handler, sum_handler, AppState};
use crate::engine::SumEngine;
use axum::routing::{get, post};
use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

/// Build the application router.
pub fn create_router(engine: Arc<SumEngine>) -> Router {
    Router::new()
        .route("/sum", post(sum_handler))
        .route("/health", get(health_handler))
        .with_state(AppState::new(engine))
}

/// Bind `addr` and serve the summation API until the process exits.
pub async fn serve(addr: SocketAddr, engine: Arc<SumEngine>) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "sum service listening");
    axum::serve(listener, create_router(engine)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds() {
        let _router = create_router(Arc::new(SumEngine::with_defaults()));
    }
}
