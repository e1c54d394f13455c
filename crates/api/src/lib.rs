//! HTTP API: server wiring, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod middleware;

pub use app::build_app;
pub use config::{ApiConfig, ConfigError};
