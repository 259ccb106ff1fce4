pub mod file_security;
