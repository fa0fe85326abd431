// Lenient views over the AppSync payloads delivered to each Lambda.
// Every field is optional: the handlers accept any JSON and only use these
// for structured log fields.

use serde::Deserialize;
use serde_json::{Map, Value};

const AUTHORIZATION_TOKEN_KEY: &str = "authorizationToken";
const REDACTED: &str = "[REDACTED]";

/// Event sent to a direct Lambda resolver.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverEvent {
    pub arguments: Value,
    pub identity: Value,
    pub source: Value,
    pub request: ResolverRequest,
    pub info: ResolverInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverRequest {
    pub headers: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverInfo {
    pub field_name: Option<String>,
    pub parent_type_name: Option<String>,
    pub variables: Map<String, Value>,
    pub selection_set_list: Vec<String>,
}

impl ResolverEvent {
    /// Returns `None` when the payload is not an object shaped like a resolver event.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// `Parent.field` as AppSync names it, e.g. `Query.getDemos`.
    pub fn qualified_field(&self) -> Option<String> {
        match (&self.info.parent_type_name, &self.info.field_name) {
            (Some(parent), Some(field)) => Some(format!("{parent}.{field}")),
            (None, Some(field)) => Some(field.clone()),
            _ => None,
        }
    }
}

/// Event sent to an AppSync Lambda authorizer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizerEvent {
    pub authorization_token: Option<String>,
    pub request_context: AuthorizerRequestContext,
    pub request_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizerRequestContext {
    pub api_id: Option<String>,
    pub account_id: Option<String>,
    pub request_id: Option<String>,
    pub query_string: Option<String>,
    pub operation_name: Option<String>,
    pub variables: Map<String, Value>,
}

impl AuthorizerEvent {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Copy of the raw payload that is safe to log: the bearer token and the
    /// `authorization` request header are masked.
    pub fn redacted(value: &Value) -> Value {
        let mut copy: Value = value.clone();

        if let Some(object) = copy.as_object_mut() {
            if let Some(token) = object.get_mut(AUTHORIZATION_TOKEN_KEY) {
                *token = Value::String(REDACTED.to_string());
            }

            if let Some(Value::Object(headers)) = object.get_mut("requestHeaders") {
                for (name, header) in headers.iter_mut() {
                    if name.eq_ignore_ascii_case("authorization") {
                        *header = Value::String(REDACTED.to_string());
                    }
                }
            }
        }

        copy
    }
}
