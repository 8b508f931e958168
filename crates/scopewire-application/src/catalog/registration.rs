//! Type Registration
//!
//! Auto-registration of catalog types. Crates that define injectable types
//! submit a [`TypeRegistration`] into the [`TYPE_REGISTRATIONS`] distributed
//! slice at compile time; `TypeCatalogBuilder::with_registered_types` picks
//! them up at runtime.
//!
//! ```ignore
//! use scopewire_application::catalog::{TypeRegistration, TYPE_REGISTRATIONS};
//!
//! #[linkme::distributed_slice(TYPE_REGISTRATIONS)]
//! static FIGHTER: TypeRegistration = TypeRegistration {
//!     name: "combat::Fighter",
//!     description: "Named fighter",
//!     describe: fighter_descriptor,
//! };
//! ```

use scopewire_domain::TypeDescriptor;

/// Registry entry for one catalog type
pub struct TypeRegistration {
    /// Catalog name; must match the descriptor's name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Descriptor factory
    pub describe: fn() -> TypeDescriptor,
}

// Auto-collection via linkme distributed slices - types submit entries at compile time
#[linkme::distributed_slice]
pub static TYPE_REGISTRATIONS: [TypeRegistration] = [..];

/// Descriptors of every registered type
///
/// Entries whose descriptor name disagrees with the registered name are
/// skipped with a warning.
pub fn registered_types() -> Vec<TypeDescriptor> {
    TYPE_REGISTRATIONS
        .iter()
        .filter_map(|entry| {
            let descriptor = (entry.describe)();
            if descriptor.name() == entry.name {
                Some(descriptor)
            } else {
                tracing::warn!(
                    registered = entry.name,
                    described = descriptor.name(),
                    "Skipping type registration with mismatched name"
                );
                None
            }
        })
        .collect()
}

/// List all registered types
///
/// Returns (name, description) tuples, useful for CLI listings.
pub fn list_registered_types() -> Vec<(&'static str, &'static str)> {
    TYPE_REGISTRATIONS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
