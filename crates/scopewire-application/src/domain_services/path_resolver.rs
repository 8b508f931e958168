//! Path resolution
//!
//! Maps identifiers and constructor parameters to the binding (or fallback)
//! that supplies them. A parameter `p` of a type built at `anchor` lives at
//! the compound path `anchor.p`; the lookup order is:
//!
//! 1. a binding at exactly `anchor.p`
//! 2. the parameter's declared catalog type, built at `anchor.p`
//! 3. the parameter's default value
//!
//! Anything else is an unresolved parameter.

use crate::registry::Registry;
use scopewire_domain::{
    Binding, Error, Identifier, ParameterSpec, Result, TypeCatalog, TypeDescriptor,
};
use serde_json::Value as Json;

/// Where a constructor parameter's value comes from
#[derive(Debug)]
pub enum ParameterSource<'a> {
    /// Explicit binding at the compound path
    Bound {
        path: Identifier,
        binding: &'a Binding,
    },
    /// Declared type, built at the compound path
    Typed {
        path: Identifier,
        descriptor: &'a TypeDescriptor,
    },
    /// Declared default
    Default { value: &'a Json },
}

/// Identifier and parameter lookup against a registry and a catalog
#[derive(Clone, Copy)]
pub struct PathResolver<'a> {
    registry: &'a Registry,
    catalog: &'a dyn TypeCatalog,
}

impl<'a> PathResolver<'a> {
    pub fn new(registry: &'a Registry, catalog: &'a dyn TypeCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Binding of a top-level identifier
    pub fn resolve(&self, identifier: &str) -> Result<&'a Binding> {
        self.registry
            .get(identifier)
            .ok_or_else(|| Error::undefined_identifier(identifier))
    }

    /// Binding registered under a type name, used to substitute abstract types
    ///
    /// Empty string bindings count as absent.
    pub fn substitute(&self, type_name: &str) -> Option<&'a Binding> {
        self.registry
            .get(type_name)
            .filter(|binding| binding.as_str() != Some(""))
    }

    /// Source of `parameter` for a type built at `anchor`
    pub fn parameter(
        &self,
        anchor: &str,
        parameter: &'a ParameterSpec,
    ) -> Result<ParameterSource<'a>> {
        let path = Identifier::join(anchor, &parameter.name);

        if let Some(binding) = self.registry.get(path.as_str()) {
            return Ok(ParameterSource::Bound { path, binding });
        }

        if let Some(type_name) = &parameter.declared_type {
            if let Some(descriptor) = self.catalog.describe(type_name) {
                return Ok(ParameterSource::Typed { path, descriptor });
            }
            tracing::debug!(
                path = %path,
                type_name = %type_name,
                "Declared parameter type is not in the catalog"
            );
        }

        match &parameter.default {
            Some(value) => Ok(ParameterSource::Default { value }),
            None => Err(Error::unresolved_parameter(path.into_string())),
        }
    }
}
