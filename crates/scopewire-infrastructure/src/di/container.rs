//! Service container
//!
//! A root [`Scope`] plus named groups of [`ServiceProvider`]s. Asking for a
//! group with [`ServiceContainer::child`] runs its providers, in attach
//! order, against a fresh registry and memoizes the resulting child scope.
//! Children share the root's catalog, constants and options.
//!
//! ```
//! use scopewire_application::{Registry, RegistryBuilder};
//! use scopewire_infrastructure::di::{ServiceContainer, ServiceProvider};
//!
//! struct Greeting;
//!
//! impl ServiceProvider for Greeting {
//!     fn register(&self, registry: &mut RegistryBuilder) {
//!         registry.set("message", "Hello");
//!     }
//! }
//!
//! let mut container = ServiceContainer::with_defaults(Registry::default());
//! container.attach("greeting", Greeting);
//!
//! let child = container.child("greeting").unwrap();
//! assert_eq!(child.get("message").unwrap().as_str(), Some("Hello"));
//! ```

use scopewire_application::{
    ConstantTable, Registry, RegistryBuilder, ResolverOptions, Scope, StaticTypeCatalog,
};
use scopewire_domain::{Binding, ConstantLookup, Error, Result, TypeCatalog, Value, ValueResolver};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

/// Contributes bindings to a child scope
pub trait ServiceProvider: Send + Sync {
    /// Add or replace bindings
    fn register(&self, registry: &mut RegistryBuilder);
}

/// Root scope with lazily assembled child scopes
pub struct ServiceContainer {
    root: Scope,
    catalog: Arc<dyn TypeCatalog>,
    constants: Arc<dyn ConstantLookup>,
    options: ResolverOptions,
    attached: HashMap<String, Vec<Arc<dyn ServiceProvider>>>,
    children: RefCell<HashMap<String, Rc<Scope>>>,
}

impl ServiceContainer {
    pub fn new(
        registry: Registry,
        catalog: Arc<dyn TypeCatalog>,
        constants: Arc<dyn ConstantLookup>,
    ) -> Self {
        Self {
            root: Scope::new(registry, Arc::clone(&catalog), Arc::clone(&constants)),
            catalog,
            constants,
            options: ResolverOptions::default(),
            attached: HashMap::new(),
            children: RefCell::new(HashMap::new()),
        }
    }

    /// Container using the standard catalog and built-in constants
    pub fn with_defaults(registry: Registry) -> Self {
        Self::new(
            registry,
            Arc::new(StaticTypeCatalog::standard()),
            Arc::new(ConstantTable::with_builtins()),
        )
    }

    /// Resolution limits for the root and every child
    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.root = self.root.with_options(options);
        self.options = options;
        self
    }

    /// Add `provider` to the group `name`
    ///
    /// Attaching to a group that was already assembled has no effect on the
    /// memoized child.
    pub fn attach<S, P>(&mut self, name: S, provider: P) -> &mut Self
    where
        S: Into<String>,
        P: ServiceProvider + 'static,
    {
        self.attached
            .entry(name.into())
            .or_default()
            .push(Arc::new(provider));
        self
    }

    /// Whether a provider group named `name` exists
    pub fn has_child(&self, name: &str) -> bool {
        self.attached.contains_key(name)
    }

    /// Child scope assembled from the providers attached under `name`
    pub fn child(&self, name: &str) -> Result<Rc<Scope>> {
        if let Some(child) = self.children.borrow().get(name) {
            return Ok(Rc::clone(child));
        }

        let providers = self
            .attached
            .get(name)
            .ok_or_else(|| Error::undefined_identifier(name))?;
        let mut registry = RegistryBuilder::new();
        for provider in providers {
            provider.register(&mut registry);
        }
        tracing::debug!(name, providers = providers.len(), "Assembled child scope");

        let child = Rc::new(
            Scope::new(
                registry.build(),
                Arc::clone(&self.catalog),
                Arc::clone(&self.constants),
            )
            .with_options(self.options),
        );
        self.children
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&child));
        Ok(child)
    }

    /// Resolve `identifier` in the root scope
    pub fn get(&self, identifier: &str) -> Result<Value> {
        self.root.get(identifier)
    }

    /// Root scope every child belongs to
    ///
    /// Children never fall back to it on their own; providers that need a
    /// root service look it up here.
    pub fn global(&self) -> &Scope {
        &self.root
    }
}

impl ValueResolver for ServiceContainer {
    fn resolve(&self, identifier: &str) -> Result<Value> {
        self.get(identifier)
    }
}

/// Wrap the binding currently staged for `identifier`
///
/// The previous binding is evaluated lazily: native closures are called,
/// literals are passed through as-is. A missing binding passes `null`.
pub fn extend<K, F>(registry: &mut RegistryBuilder, identifier: K, wrap: F) -> &mut RegistryBuilder
where
    K: Into<String>,
    F: Fn(Value, &dyn ValueResolver) -> Result<Value> + Send + Sync + 'static,
{
    let identifier = identifier.into();
    let previous = registry.get(&identifier).cloned();
    registry.set_fn(identifier, move |resolver, id| {
        let value = match &previous {
            Some(Binding::Invokable(callable)) => callable.call(resolver, id)?,
            Some(Binding::Literal(literal)) => Value::Literal(literal.clone()),
            None => Value::null(),
        };
        wrap(value, resolver)
    })
}
