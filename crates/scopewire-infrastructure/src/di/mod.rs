//! Service containers
//!
//! Grouped, lazily assembled scopes built from service providers.

pub mod container;

pub use container::{ServiceContainer, ServiceProvider, extend};
