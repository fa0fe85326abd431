// Library root for the AppSync demo Lambdas and their local invocation server

pub mod api;
pub mod config;
pub mod core;
pub mod handlers;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::handlers::LambdaFunction;
pub use crate::models::{AuthorizerResponse, Demo};
