// AppSync Lambda authorizer response

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Decision returned to AppSync for every request under Lambda authorization.
///
/// `resolver_context` is surfaced to resolvers as `$ctx.identity.resolverContext`,
/// and `denied_fields` lists `Type.field` entries that resolve to null even
/// when the request is authorized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub is_authorized: bool,
    pub resolver_context: BTreeMap<String, String>,
    pub denied_fields: Vec<String>,
}

impl AuthorizerResponse {
    /// Grants access to every field with a fixed `hello: world` context.
    pub fn allow_all() -> Self {
        let mut resolver_context: BTreeMap<String, String> = BTreeMap::new();
        resolver_context.insert("hello".to_string(), "world".to_string());

        Self {
            is_authorized: true,
            resolver_context,
            denied_fields: Vec::new(),
        }
    }
}
