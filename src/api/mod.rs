// HTTP surface of the local invocation server

pub mod invocations;
pub mod status;
