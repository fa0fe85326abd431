// Deployed as the AppSync data source for Query.getDemos

use lambda_runtime::{service_fn, Error};

use appsync_demo_lambdas::handlers::api::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(function_handler)).await
}
