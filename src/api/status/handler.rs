// Local server status

use serde_json::json;
use axum::{http::StatusCode, extract::State};
use std::backtrace::Backtrace;
use tracing::{instrument, info};

use crate::config::state::AppState;
use crate::handlers::LambdaFunction;
use crate::utils::response_handler::HandlerResponse;

/// Returns version, environment and the invocable functions
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn status_handler(
    State(state): State<AppState>,
) -> HandlerResponse {
    info!("Status endpoint called");

    let functions: Vec<&'static str> = LambdaFunction::ALL.iter().map(|f| f.name()).collect();

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "environment": state.environment.environment.as_ref(),
            "functions": functions
        }))
        .message("Local invocation server is running")
}
