//! Plan output configuration types

use scopewire_application::PlanSerializer;
use serde::{Deserialize, Serialize};

/// How compiled plans are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Indent plan documents
    pub pretty: bool,

    /// Keep each entry's raw binding in the document
    pub include_source: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_source: true,
        }
    }
}

impl PlanConfig {
    /// Serializer honoring this configuration
    pub fn serializer(&self) -> PlanSerializer {
        PlanSerializer::new()
            .with_pretty(self.pretty)
            .with_source(self.include_source)
    }
}
