// Deployed as the AppSync API's Lambda authorizer

use lambda_runtime::{service_fn, Error};

use appsync_demo_lambdas::handlers::authorizer::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(function_handler)).await
}
