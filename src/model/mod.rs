pub mod config;
pub mod error;
pub mod log;
pub mod security_descriptor;
pub mod snapshot;
