// Start of file: /src/core/logging.rs

// Tracing setup for the local server. The Lambda binaries use
// `lambda_runtime::tracing::init_default_subscriber` instead, which honours
// the Lambda log level and format controls.

use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::format::FmtSpan;

const DEFAULT_FILTER: &str = "appsync_demo_lambdas=info,axum=info";

// Initialize the tracing subscriber with default configuration
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::FULL)
        .init();
}


// End of file: /src/core/logging.rs
