pub mod core;
pub mod interface;
pub mod r#macro;
pub mod model;
pub mod platform;
pub mod utils;
