// Local equivalent of the Lambda Invoke API

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use std::backtrace::Backtrace;
use tracing::{info, instrument, warn};

use crate::config::state::AppState;
use crate::handlers::LambdaFunction;
use crate::utils::response_handler::{HandlerResponse, PassthroughResponse};

/// Runs the named function on the request body and returns its output as-is.
/// An empty body is delivered as a `null` event, like an Invoke call without payload.
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(_state, body))]
pub async fn invoke_handler(
    State(_state): State<AppState>,
    Path(function_name): Path<String>,
    body: Bytes, // Forces body reading and triggers size limits
) -> Result<PassthroughResponse, HandlerResponse> {
    let function: LambdaFunction = function_name.parse().map_err(|err: anyhow::Error| {
        let message: String = err.to_string();
        warn!("{}", message);
        HandlerResponse::new(StatusCode::NOT_FOUND)
            .data(json!({
                "function": function_name,
                "available": LambdaFunction::ALL.iter().map(|f| f.name()).collect::<Vec<_>>()
            }))
            .message(message)
    })?;

    let event: Value = parse_event(&body).map_err(|err| {
        HandlerResponse::new(StatusCode::BAD_REQUEST)
            .data(json!({ "error": err.to_string() }))
            .message("Event payload is not valid JSON")
    })?;

    info!("Invoking {} with a {} byte event", function.name(), body.len());

    let output: Value = function.invoke(&event).map_err(|err| {
        HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
            .data(json!({ "error": err.to_string() }))
            .message("Function output could not be serialized")
    })?;

    Ok(PassthroughResponse(output))
}

fn parse_event(body: &[u8]) -> serde_json::Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}
