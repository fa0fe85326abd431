// Start of file: /src/config/mod.rs

/*
* Configuration for the local invocation server: environment variables and
* the state handed to its routes.
*/

pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs
