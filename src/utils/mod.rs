pub mod file_lock;
pub mod logging;
pub mod privilege;
pub mod wide;
