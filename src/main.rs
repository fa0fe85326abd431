// Local invocation server: serves both Lambda handlers over HTTP

use axum::{Router, serve};
use tokio::net::TcpListener;

use appsync_demo_lambdas::config::state::AppState;
use appsync_demo_lambdas::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;
    if state.environment.is_production() {
        tracing::warn!("Local invocation server started with ENVIRONMENT=production");
    }

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    let app: Router = server::create_app(state)?;

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
