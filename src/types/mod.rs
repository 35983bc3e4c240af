pub mod config;
pub mod golangci;
