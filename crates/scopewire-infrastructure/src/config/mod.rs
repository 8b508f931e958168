//! Configuration
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `SCOPEWIRE_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, PlanConfig, ResolverConfig};
