//! Constant Lookup Port

use serde_json::Value as Json;

/// Resolves named constants used as bindings (`"i64::MAX"`)
pub trait ConstantLookup: Send + Sync {
    /// Value of constant `name`, if defined
    fn lookup_constant(&self, name: &str) -> Option<Json>;
}
