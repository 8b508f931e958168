//! Value Resolver Port
//!
//! The single capability native factories and factory types need from the
//! scope they run in: resolving another identifier through its memo table.

use crate::error::Result;
use crate::value_objects::Value;

/// Resolves identifiers to values
pub trait ValueResolver {
    /// Resolve `identifier`, reusing a memoized result when one exists
    fn resolve(&self, identifier: &str) -> Result<Value>;
}
