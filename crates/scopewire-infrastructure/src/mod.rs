//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the resolution engine.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`bindings`] | JSON/TOML bindings files |
//! | [`di`] | Service containers with provider groups |
//! | [`constants`] | Infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Error context extensions |

pub mod bindings;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bindings::{BindingsFormat, load_bindings, parse_bindings};
pub use config::{AppConfig, ConfigLoader};
pub use di::{ServiceContainer, ServiceProvider};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
