//! tests/mod.rs
//! A shared test helper to spawn the local invocation server on an ephemeral port.

use std::collections::HashMap;

use appsync_demo_lambdas::config::{state::AppState, environment::EnvironmentVariables};
use appsync_demo_lambdas::core::server::create_app;

use tokio::net::TcpListener as TokioTcpListener;
use axum::{Router, serve};

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    // * Defaults only, so the developer's .env does not leak into tests.
    let env: EnvironmentVariables = EnvironmentVariables::from_vars(&HashMap::new())
        .expect("Default configuration should load");
    let state: AppState = AppState::new(env);

    // * Build the application exactly as main() does.
    let app: Router = create_app(state).expect("Failed to build app");

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
