// Invocation route definitions

use axum::{
    routing::post,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Same path shape as the Lambda Invoke API
pub fn invocation_routes() -> Router<AppState> {
    Router::new()
        .route("/functions/{function_name}/invocations", post(handler::invoke_handler))
}
