//! Resolution scope
//!
//! A [`Scope`] resolves identifiers to values and memoizes every result for
//! its lifetime: resolving the same identifier twice returns the same value,
//! and for instances the same shared object.
//!
//! Scopes are backed either by a [`Registry`] (tokens are built on demand)
//! or by a [`CompiledPlan`] (tokens are looked up). Both paths execute tokens
//! the same way. A scope is single-threaded; build one per unit of work.
//!
//! ## Example
//!
//! ```
//! use scopewire_application::Scope;
//!
//! let scope = Scope::builder()
//!     .bind("greeting", "hello")
//!     .bind("alias", "@greeting")
//!     .build();
//!
//! assert_eq!(scope.get("alias").unwrap().as_str(), Some("hello"));
//! ```

use crate::catalog::{ConstantTable, StaticTypeCatalog};
use crate::domain_services::{BuildMode, Executor, TokenBuilder};
use crate::plan::{CompiledPlan, Compiler, PlanSerializer};
use crate::registry::{Registry, RegistryBuilder};
use scopewire_domain::constants::DEFAULT_MAX_BUILD_DEPTH;
use scopewire_domain::{
    Binding, ConstantLookup, Error, Result, Token, TypeCatalog, Value, ValueResolver,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolution limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Maximum nesting of types built for one identifier
    pub max_depth: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_BUILD_DEPTH,
        }
    }
}

enum Source {
    Registry(Registry),
    Plan(CompiledPlan),
}

/// Memoizing identifier resolver
pub struct Scope {
    source: Source,
    catalog: Arc<dyn TypeCatalog>,
    constants: Arc<dyn ConstantLookup>,
    options: ResolverOptions,
    memo: RefCell<HashMap<String, Value>>,
    resolving: RefCell<Vec<String>>,
}

impl Scope {
    /// Registry-backed scope
    pub fn new(
        registry: Registry,
        catalog: Arc<dyn TypeCatalog>,
        constants: Arc<dyn ConstantLookup>,
    ) -> Self {
        Self::with_source(Source::Registry(registry), catalog, constants)
    }

    /// Plan-backed scope
    ///
    /// Substitute bindings keyed by a type name are consumed at compile time
    /// and are not entries of the plan, so they cannot be resolved here.
    pub fn from_plan(
        plan: CompiledPlan,
        catalog: Arc<dyn TypeCatalog>,
        constants: Arc<dyn ConstantLookup>,
    ) -> Self {
        Self::with_source(Source::Plan(plan), catalog, constants)
    }

    fn with_source(
        source: Source,
        catalog: Arc<dyn TypeCatalog>,
        constants: Arc<dyn ConstantLookup>,
    ) -> Self {
        Self {
            source,
            catalog,
            constants,
            options: ResolverOptions::default(),
            memo: RefCell::new(HashMap::new()),
            resolving: RefCell::new(Vec::new()),
        }
    }

    pub fn builder() -> ScopeBuilder {
        ScopeBuilder::default()
    }

    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve `identifier`, memoizing the result
    pub fn get(&self, identifier: &str) -> Result<Value> {
        if let Some(value) = self.memo.borrow().get(identifier) {
            tracing::trace!(identifier, "Memoized value");
            return Ok(value.clone());
        }

        self.enter(identifier)?;
        let result = self.compute(identifier);
        self.resolving.borrow_mut().pop();
        let value = result?;

        tracing::debug!(identifier, "Resolved");
        Ok(self
            .memo
            .borrow_mut()
            .entry(identifier.to_string())
            .or_insert(value)
            .clone())
    }

    /// Token tree `get` would execute for `identifier`
    ///
    /// Native closures appear as `Invoke` nodes; nothing is constructed.
    pub fn tokenize(&self, identifier: &str) -> Result<Token> {
        match &self.source {
            Source::Registry(registry) => {
                self.token_builder(registry, BuildMode::Execute).build(identifier)
            }
            Source::Plan(plan) => plan
                .token(identifier)
                .cloned()
                .ok_or_else(|| Error::undefined_identifier(identifier)),
        }
    }

    /// Build a fresh `type_name` anchored at `anchor`
    ///
    /// The anchor itself needs no binding and the result is not memoized.
    /// Parameters follow the usual `anchor.param` precedence and shared
    /// references still go through this scope.
    pub fn create_instance(&self, type_name: &str, anchor: &str) -> Result<Value> {
        let Source::Registry(registry) = &self.source else {
            return Err(Error::plan(format!(
                "cannot create \"{type_name}\" at \"{anchor}\" from a compiled plan"
            )));
        };
        let token = self
            .token_builder(registry, BuildMode::Execute)
            .build_instance(type_name, anchor)?;
        tracing::debug!(type_name, anchor, "Creating instance");
        self.execute(&token)
    }

    /// Execute a token tree against this scope
    pub fn execute(&self, token: &Token) -> Result<Value> {
        Executor::new(self.catalog.as_ref(), self).execute(token)
    }

    /// Compile every identifier into a plan
    pub fn compile_plan(&self) -> Result<CompiledPlan> {
        match &self.source {
            Source::Registry(registry) => {
                Compiler::new(registry, self.catalog.as_ref(), self.constants.as_ref())
                    .with_max_depth(self.options.max_depth)
                    .compile()
            }
            Source::Plan(plan) => Ok(plan.clone()),
        }
    }

    /// Compile every identifier and render the plan document
    pub fn compile(&self) -> Result<String> {
        PlanSerializer::new().render_plan(&self.compile_plan()?)
    }

    /// Whether `identifier` can be resolved
    pub fn contains(&self, identifier: &str) -> bool {
        match &self.source {
            Source::Registry(registry) => registry.contains(identifier),
            Source::Plan(plan) => plan.contains(identifier),
        }
    }

    /// Whether `identifier` has already been resolved in this scope
    pub fn is_resolved(&self, identifier: &str) -> bool {
        self.memo.borrow().contains_key(identifier)
    }

    /// Backing registry, for registry-backed scopes
    pub fn registry(&self) -> Option<&Registry> {
        match &self.source {
            Source::Registry(registry) => Some(registry),
            Source::Plan(_) => None,
        }
    }

    pub fn catalog(&self) -> &Arc<dyn TypeCatalog> {
        &self.catalog
    }

    pub fn constants(&self) -> &Arc<dyn ConstantLookup> {
        &self.constants
    }

    fn compute(&self, identifier: &str) -> Result<Value> {
        let token = match &self.source {
            Source::Registry(registry) => {
                let binding = registry
                    .get(identifier)
                    .ok_or_else(|| Error::undefined_identifier(identifier))?;
                if let Binding::Invokable(callable) = binding {
                    return callable.call(self, identifier);
                }
                self.token_builder(registry, BuildMode::Execute)
                    .build_binding(binding, identifier)?
            }
            Source::Plan(plan) => plan
                .token(identifier)
                .cloned()
                .ok_or_else(|| Error::undefined_identifier(identifier))?,
        };
        self.execute(&token)
    }

    fn token_builder<'a>(&'a self, registry: &'a Registry, mode: BuildMode) -> TokenBuilder<'a> {
        TokenBuilder::new(registry, self.catalog.as_ref(), self.constants.as_ref(), mode)
            .with_max_depth(self.options.max_depth)
    }

    fn enter(&self, identifier: &str) -> Result<()> {
        let mut resolving = self.resolving.borrow_mut();
        if resolving.iter().any(|active| active == identifier) {
            let chain = resolving
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(identifier))
                .collect::<Vec<_>>();
            return Err(Error::cyclic_binding(chain));
        }
        resolving.push(identifier.to_string());
        Ok(())
    }
}

impl ValueResolver for Scope {
    fn resolve(&self, identifier: &str) -> Result<Value> {
        self.get(identifier)
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (kind, entries) = match &self.source {
            Source::Registry(registry) => ("registry", registry.len()),
            Source::Plan(plan) => ("plan", plan.len()),
        };
        f.debug_struct("Scope")
            .field("source", &kind)
            .field("entries", &entries)
            .field("resolved", &self.memo.borrow().len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for registry-backed scopes
///
/// Defaults to the built-in catalog and constant table.
#[derive(Default)]
pub struct ScopeBuilder {
    registry: RegistryBuilder,
    catalog: Option<Arc<dyn TypeCatalog>>,
    constants: Option<Arc<dyn ConstantLookup>>,
    options: ResolverOptions,
}

impl ScopeBuilder {
    #[must_use]
    pub fn bind<K: Into<String>, B: Into<Binding>>(mut self, identifier: K, binding: B) -> Self {
        self.registry.set(identifier, binding);
        self
    }

    #[must_use]
    pub fn bind_fn<K, F>(mut self, identifier: K, callable: F) -> Self
    where
        K: Into<String>,
        F: Fn(&dyn ValueResolver, &str) -> Result<Value> + Send + Sync + 'static,
    {
        self.registry.set_fn(identifier, callable);
        self
    }

    /// Start from an existing registry; later `bind` calls override it
    #[must_use]
    pub fn registry(mut self, registry: &Registry) -> Self {
        self.registry = registry.to_builder();
        self
    }

    #[must_use]
    pub fn catalog<C: TypeCatalog + 'static>(self, catalog: C) -> Self {
        self.shared_catalog(Arc::new(catalog))
    }

    #[must_use]
    pub fn shared_catalog(mut self, catalog: Arc<dyn TypeCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn constants<C: ConstantLookup + 'static>(self, constants: C) -> Self {
        self.shared_constants(Arc::new(constants))
    }

    #[must_use]
    pub fn shared_constants(mut self, constants: Arc<dyn ConstantLookup>) -> Self {
        self.constants = Some(constants);
        self
    }

    #[must_use]
    pub fn options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Scope {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(StaticTypeCatalog::builder().with_builtins().build()));
        let constants = self
            .constants
            .unwrap_or_else(|| Arc::new(ConstantTable::with_builtins()));
        Scope::new(self.registry.build(), catalog, constants).with_options(self.options)
    }
}
