//! Resolver configuration types

use scopewire_application::ResolverOptions;
use scopewire_domain::constants::DEFAULT_MAX_BUILD_DEPTH;
use serde::{Deserialize, Serialize};

/// Resolution limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum nesting of types built for one identifier
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_BUILD_DEPTH,
        }
    }
}

impl ResolverConfig {
    /// Scope options for this configuration
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            max_depth: self.max_depth,
        }
    }
}
