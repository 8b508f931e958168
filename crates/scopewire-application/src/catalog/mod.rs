//! Type catalog and constants
//!
//! Concrete implementations of the [`TypeCatalog`] and
//! [`ConstantLookup`](scopewire_domain::ConstantLookup) ports.
//!
//! ## Available Items
//!
//! | Item | Description |
//! |------|-------------|
//! | [`StaticTypeCatalog`] | Immutable name -> descriptor map |
//! | [`TypeCatalogBuilder`] | Explicit, built-in and link-time registration |
//! | [`ConstantTable`] | Named constants |
//! | [`TYPE_REGISTRATIONS`] | Distributed slice of registered types |
//! | [`Proxy`] | Built-in `scopewire::Proxy` factory |

pub mod constants;
pub mod proxy;
pub mod registration;

pub use constants::ConstantTable;
pub use proxy::{PROXY_TYPE, Proxy, proxy_descriptor};
pub use registration::{
    TYPE_REGISTRATIONS, TypeRegistration, list_registered_types, registered_types,
};

use scopewire_domain::{TypeCatalog, TypeDescriptor};
use std::collections::HashMap;

/// Immutable type catalog
#[derive(Debug, Clone, Default)]
pub struct StaticTypeCatalog {
    types: HashMap<String, TypeDescriptor>,
}

impl StaticTypeCatalog {
    /// Start building a catalog
    pub fn builder() -> TypeCatalogBuilder {
        TypeCatalogBuilder::new()
    }

    /// Built-ins plus every link-time registered type
    pub fn standard() -> Self {
        Self::builder().with_builtins().with_registered_types().build()
    }

    /// Number of types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TypeCatalog for StaticTypeCatalog {
    fn describe(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }
}

/// Builder for [`StaticTypeCatalog`]
///
/// Later registrations under the same name replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalogBuilder {
    types: HashMap<String, TypeDescriptor>,
}

impl TypeCatalogBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one descriptor
    #[must_use]
    pub fn register(mut self, descriptor: TypeDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// In-place variant of [`TypeCatalogBuilder::register`]
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        tracing::trace!(type_name = descriptor.name(), "Registering catalog type");
        self.types.insert(descriptor.name().to_string(), descriptor);
        self
    }

    /// Register the built-in types
    #[must_use]
    pub fn with_builtins(self) -> Self {
        self.register(proxy_descriptor())
    }

    /// Register every type submitted to [`TYPE_REGISTRATIONS`]
    #[must_use]
    pub fn with_registered_types(mut self) -> Self {
        for descriptor in registered_types() {
            self.insert(descriptor);
        }
        self
    }

    /// Freeze the catalog
    pub fn build(self) -> StaticTypeCatalog {
        tracing::debug!(types = self.types.len(), "Type catalog built");
        StaticTypeCatalog { types: self.types }
    }
}
