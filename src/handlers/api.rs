// Direct Lambda resolver for Query.getDemos

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::models::{Demo, ResolverEvent};

/// Field this resolver is attached to in the GraphQL schema
pub const RESOLVED_FIELD: &str = "getDemos";

/// The fixed result list
pub fn demos() -> Vec<Demo> {
    vec![Demo::new("foo", "bar")]
}

/// Logs the event and returns the demo list, whatever the payload is.
pub fn resolve(event: &Value) -> Vec<Demo> {
    info!(event = %event, "Received resolver event");

    match ResolverEvent::from_value(event) {
        Some(view) => match view.info.field_name.as_deref() {
            Some(RESOLVED_FIELD) | None => {
                debug!(field = ?view.qualified_field(), "Resolving demos");
            }
            Some(other) => {
                warn!(field = other, "Resolver invoked for a field other than {RESOLVED_FIELD}");
            }
        },
        None => debug!("Payload is not an AppSync resolver event"),
    }

    demos()
}

/// Lambda entrypoint used by the `api-lambda` binary
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Vec<Demo>, Error> {
    Ok(resolve(&event.payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::log_capture::capture_logs;
    use lambda_runtime::Context;
    use serde_json::json;

    fn expected() -> Value {
        json!([{ "id": "foo", "version": "bar" }])
    }

    #[test]
    fn returns_fixed_list_for_appsync_event() {
        let event = json!({
            "arguments": {},
            "identity": { "resolverContext": { "hello": "world" } },
            "source": null,
            "request": { "headers": { "host": "example.appsync-api.eu-west-1.amazonaws.com" } },
            "info": {
                "fieldName": "getDemos",
                "parentTypeName": "Query",
                "variables": {},
                "selectionSetList": ["id", "version"]
            }
        });

        let value = serde_json::to_value(resolve(&event)).expect("demos should serialize");

        assert_eq!(value, expected());
    }

    #[test]
    fn ignores_payload_shape() {
        for event in [json!({}), Value::Null, json!([1, 2]), json!("text"), json!({ "info": 42 })] {
            let value = serde_json::to_value(resolve(&event)).expect("demos should serialize");
            assert_eq!(value, expected(), "payload {event} changed the result");
        }
    }

    #[test]
    fn other_fields_still_get_the_list() {
        let event = json!({ "info": { "fieldName": "getSomethingElse", "parentTypeName": "Query" } });

        assert_eq!(resolve(&event), demos());
    }

    #[test]
    fn logs_the_incoming_event() {
        let event = json!({
            "arguments": { "limit": 5 },
            "info": { "fieldName": "getDemos", "parentTypeName": "Query" }
        });

        let (result, logs) = capture_logs(|| resolve(&event));

        assert_eq!(result, demos());
        assert!(logs.contains("Received resolver event"), "logs were: {logs}");
        assert!(logs.contains("\"fieldName\":\"getDemos\""), "logs were: {logs}");
        assert!(logs.contains("\"limit\":5"), "logs were: {logs}");
    }

    #[test]
    fn warns_about_unexpected_field() {
        let event = json!({ "info": { "fieldName": "getUsers", "parentTypeName": "Query" } });

        let (_, logs) = capture_logs(|| resolve(&event));

        assert!(logs.contains("WARN"), "logs were: {logs}");
        assert!(logs.contains("getUsers"), "logs were: {logs}");
    }

    #[tokio::test]
    async fn function_handler_returns_list() {
        let event = LambdaEvent::new(json!({ "arguments": {} }), Context::default());

        let result = function_handler(event).await.expect("handler never fails");

        assert_eq!(serde_json::to_value(result).expect("demos should serialize"), expected());
    }
}
