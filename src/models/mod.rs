// Start of file: /src/models/mod.rs

/*
    * Response records returned by the Lambda handlers, and lenient views
    * over the AppSync event payloads used for logging.
*/

pub mod authorization;
pub mod demo;
pub mod events;

pub use authorization::AuthorizerResponse;
pub use demo::Demo;
pub use events::{AuthorizerEvent, ResolverEvent};

// End of file: /src/models/mod.rs
