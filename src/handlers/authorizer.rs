// AppSync Lambda authorizer: grants every request

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::models::{AuthorizerEvent, AuthorizerResponse};
use crate::utils::utils::to_two_space_indented_json;

/// Logs the event (token masked) and returns the allow-all decision.
pub fn authorize(event: &Value) -> AuthorizerResponse {
    info!(event = %AuthorizerEvent::redacted(event), "Received authorization request");

    if let Some(view) = AuthorizerEvent::from_value(event) {
        debug!(
            api_id = ?view.request_context.api_id,
            request_id = ?view.request_context.request_id,
            operation = ?view.request_context.operation_name,
            has_token = view.authorization_token.is_some(),
            "Authorizing AppSync request"
        );
    }

    let response: AuthorizerResponse = AuthorizerResponse::allow_all();

    match to_two_space_indented_json(&response) {
        Ok(pretty) => info!("Responding with {}", pretty),
        Err(err) => error!("Failed to format authorizer response: {:?}", err),
    }

    response
}

/// Lambda entrypoint used by the `authorizer-lambda` binary
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<AuthorizerResponse, Error> {
    Ok(authorize(&event.payload))
}
