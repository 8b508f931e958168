//! Binding Registry
//!
//! Immutable, ordered mapping from identifier to raw binding. Iteration order
//! is insertion order; it does not affect resolution but fixes the entry
//! order of compiled plans.

use indexmap::IndexMap;
use scopewire_domain::{Binding, Result, Value, ValueResolver};
use serde_json::Value as Json;

/// Immutable identifier -> binding map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    bindings: IndexMap<String, Binding>,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry made of literal bindings only
    ///
    /// ```
    /// use scopewire_application::Registry;
    /// use serde_json::json;
    ///
    /// let registry = Registry::from_literals([
    ///     ("fighter", json!("combat::Fighter")),
    ///     ("fighter.name", json!("Baraka")),
    /// ]);
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn from_literals<I, K>(literals: I) -> Self
    where
        I: IntoIterator<Item = (K, Json)>,
        K: Into<String>,
    {
        literals
            .into_iter()
            .map(|(identifier, json)| (identifier.into(), Binding::Literal(json)))
            .collect()
    }

    /// Binding stored for `identifier`
    pub fn get(&self, identifier: &str) -> Option<&Binding> {
        self.bindings.get(identifier)
    }

    /// Whether `identifier` is bound
    pub fn contains(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings
            .iter()
            .map(|(identifier, binding)| (identifier.as_str(), binding))
    }

    /// Identifiers in insertion order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Builder pre-populated with these bindings
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            bindings: self.bindings.clone(),
        }
    }
}

impl FromIterator<(String, Binding)> for Registry {
    fn from_iter<T: IntoIterator<Item = (String, Binding)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a String, &'a Binding);
    type IntoIter = indexmap::map::Iter<'a, String, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

/// Mutable staging area for a [`Registry`]
///
/// Rebinding an identifier replaces the binding but keeps its first
/// position.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    bindings: IndexMap<String, Binding>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `identifier` to a literal or prepared binding
    #[must_use]
    pub fn bind<K: Into<String>, B: Into<Binding>>(mut self, identifier: K, binding: B) -> Self {
        self.set(identifier, binding);
        self
    }

    /// Bind `identifier` to a native closure
    #[must_use]
    pub fn bind_fn<K, F>(mut self, identifier: K, callable: F) -> Self
    where
        K: Into<String>,
        F: Fn(&dyn ValueResolver, &str) -> Result<Value> + Send + Sync + 'static,
    {
        self.set_fn(identifier, callable);
        self
    }

    /// In-place variant of [`RegistryBuilder::bind`]
    pub fn set<K: Into<String>, B: Into<Binding>>(
        &mut self,
        identifier: K,
        binding: B,
    ) -> &mut Self {
        self.bindings.insert(identifier.into(), binding.into());
        self
    }

    /// In-place variant of [`RegistryBuilder::bind_fn`]
    pub fn set_fn<K, F>(&mut self, identifier: K, callable: F) -> &mut Self
    where
        K: Into<String>,
        F: Fn(&dyn ValueResolver, &str) -> Result<Value> + Send + Sync + 'static,
    {
        self.set(identifier, Binding::invokable(callable))
    }

    /// Binding currently staged for `identifier`
    pub fn get(&self, identifier: &str) -> Option<&Binding> {
        self.bindings.get(identifier)
    }

    /// Whether `identifier` is staged
    pub fn contains(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    /// Freeze the staged bindings
    pub fn build(self) -> Registry {
        Registry {
            bindings: self.bindings,
        }
    }
}
