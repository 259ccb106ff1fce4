pub mod file_security;
pub mod privilege;
pub mod raii_guard;
