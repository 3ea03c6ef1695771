// Domain module - Configuration, errors and platform resources
pub mod config;
pub mod error;
pub mod resources;
