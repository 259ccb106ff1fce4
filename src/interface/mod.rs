pub mod file_security;
pub mod repository;
