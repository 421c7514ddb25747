pub mod config;
pub mod role;
pub mod scoring;
