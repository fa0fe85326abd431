// Process-level wiring: tracing setup and the local HTTP server

pub mod logging;
pub mod server;
