//! Application configuration root

use super::{LoggingConfig, PlanConfig, ResolverConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [resolver]
/// max_depth = 64
///
/// [plan]
/// pretty = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Resolution limits
    pub resolver: ResolverConfig,

    /// Plan rendering
    pub plan: PlanConfig,
}
