//! # scopewire
//!
//! A path-keyed object-graph resolver. Bindings map dotted identifiers to
//! literals, type names, aliases and native closures; a [`Scope`] turns them
//! into memoized values, and a compiled plan captures the same resolution as
//! a persistable token document.
//!
//! ## Example
//!
//! ```
//! use scopewire::Scope;
//! use serde_json::json;
//!
//! let scope = Scope::builder()
//!     .bind("config", json!({"http": {"port": 8080}}))
//!     .bind("port", "scopewire::Proxy")
//!     .bind("port.from", json!(["config", "http", "port"]))
//!     .build();
//!
//! assert_eq!(scope.get("port").unwrap().as_i64(), Some(8080));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identifiers, bindings, values, tokens, ports and the error type
//! - `application` - registry, catalog, resolution services, scope and plans
//! - `infrastructure` - configuration, logging, bindings files, service containers
//! - `commands` - the operations behind the `scopewire` binary

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use scopewire_domain::*;
}

/// Application layer - the resolution engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use scopewire_application::*;
}

/// Infrastructure layer - config, logging, bindings files and containers
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use scopewire_infrastructure::*;
}

pub mod commands;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine entry points
pub use application::{
    CompiledPlan, ConstantTable, PlanSerializer, Registry, RegistryBuilder, ResolverOptions,
    Scope, ScopeBuilder, StaticTypeCatalog, TypeCatalogBuilder,
};
