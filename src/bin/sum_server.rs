// ============================================================================
// Summation HTTP Server
// Serves the sum endpoint on a configurable address
// ============================================================================

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use sum_engine::http;
use sum_engine::prelude::*;

const ADDR_ENV: &str = "SUM_ENGINE_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let raw_addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = match raw_addr.parse() {
        Ok(addr) => addr,
        Err(error) => {
            eprintln!("invalid {} value {:?}: {}", ADDR_ENV, raw_addr, error);
            return ExitCode::FAILURE;
        },
    };

    let engine = Arc::new(SumEngine::new(SumConfig::new(), Arc::new(LoggingEventHandler)));
    if let Some(reducer) = engine.reducer_name() {
        tracing::info!(reducer, "vectorized fast path available");
    }

    if let Err(error) = http::serve(addr, engine).await {
        tracing::error!(error = %error, "server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
