// Lambda handlers. Each exposes a pure function over the raw JSON event and a
// `function_handler` for `lambda_runtime::service_fn`.

pub mod api;
pub mod authorizer;

#[cfg(test)]
pub(crate) mod log_capture;

use std::str::FromStr;
use serde_json::Value;

/// The functions deployed behind the AppSync API, addressable by name on the
/// local invocation server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LambdaFunction {
    Api,
    Authorizer,
}

impl LambdaFunction {
    pub const ALL: [LambdaFunction; 2] = [LambdaFunction::Api, LambdaFunction::Authorizer];

    pub fn name(self) -> &'static str {
        match self {
            LambdaFunction::Api => "api",
            LambdaFunction::Authorizer => "authorizer",
        }
    }

    /// Runs the function on an event and returns its JSON output.
    pub fn invoke(self, event: &Value) -> serde_json::Result<Value> {
        match self {
            LambdaFunction::Api => serde_json::to_value(api::resolve(event)),
            LambdaFunction::Authorizer => serde_json::to_value(authorizer::authorize(event)),
        }
    }
}

impl FromStr for LambdaFunction {
    type Err = anyhow::Error;

    // Construct ids from the deployment are accepted too
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "api" | "apiLambda" => Ok(LambdaFunction::Api),
            "authorizer" | "authorizerLambda" => Ok(LambdaFunction::Authorizer),
            other => Err(anyhow::anyhow!("Unknown function '{other}'")),
        }
    }
}
