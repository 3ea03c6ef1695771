// Infrastructure module - External dependencies and adapters
pub mod config;
pub mod logging;
pub mod snapshot;
