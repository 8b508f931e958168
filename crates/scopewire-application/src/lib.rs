//! # scopewire application
//!
//! The resolution engine. Given a [`Registry`] of path-keyed bindings and a
//! [`TypeCatalog`](scopewire_domain::TypeCatalog) describing constructible
//! types, a [`Scope`] resolves identifiers into memoized values, either by
//! building token trees on demand or by executing a precompiled plan.
//!
//! ## Resolution at a glance
//!
//! ```
//! use scopewire_application::{Scope, StaticTypeCatalog};
//! use scopewire_domain::{ParameterSpec, TypeDescriptor, Value};
//!
//! struct Fighter {
//!     name: String,
//! }
//!
//! let catalog = StaticTypeCatalog::builder()
//!     .register(TypeDescriptor::constructible(
//!         "combat::Fighter",
//!         vec![ParameterSpec::new("name")],
//!         |args| Ok(Value::instance("combat::Fighter", Fighter { name: args.string(0)? })),
//!     ))
//!     .build();
//!
//! let scope = Scope::builder()
//!     .catalog(catalog)
//!     .bind("fighter", "combat::Fighter")
//!     .bind("fighter.name", "Baraka")
//!     .build();
//!
//! let fighter = scope.get("fighter").unwrap().downcast::<Fighter>().unwrap();
//! assert_eq!(fighter.name, "Baraka");
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Immutable binding map |
//! | [`catalog`] | Type catalog, constants, built-in types |
//! | [`domain_services`] | Path resolution, classification, token building, execution |
//! | [`scope`] | Memoizing resolver |
//! | [`plan`] | Compile-all and plan persistence |

pub mod catalog;
pub mod domain_services;
pub mod plan;
pub mod registry;
pub mod scope;

pub use catalog::{ConstantTable, StaticTypeCatalog, TypeCatalogBuilder};
pub use domain_services::{BuildMode, Executor, TokenBuilder};
pub use plan::{CompiledPlan, PlanEntry, PlanSerializer};
pub use registry::{Registry, RegistryBuilder};
pub use scope::{ResolverOptions, Scope, ScopeBuilder};
