pub mod app_config;
pub mod security_manager;
pub mod snapshot_store;
pub mod system;
