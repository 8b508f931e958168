//! Configuration types module

pub mod app;
pub mod logging;
pub mod plan;
pub mod resolver;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use plan::PlanConfig;
pub use resolver::ResolverConfig;
