//! Compile-all
//!
//! Builds a token for every identifier in a registry. Identifiers that are
//! themselves catalog type names are substitution entries for abstract types
//! and are not compiled on their own.

use crate::domain_services::{BuildMode, TokenBuilder};
use crate::plan::{CompiledPlan, PlanEntry};
use crate::registry::Registry;
use scopewire_domain::constants::DEFAULT_MAX_BUILD_DEPTH;
use scopewire_domain::{ConstantLookup, Result, TypeCatalog};

/// Plan compiler
pub struct Compiler<'a> {
    registry: &'a Registry,
    catalog: &'a dyn TypeCatalog,
    constants: &'a dyn ConstantLookup,
    max_depth: usize,
}

impl<'a> Compiler<'a> {
    pub fn new(
        registry: &'a Registry,
        catalog: &'a dyn TypeCatalog,
        constants: &'a dyn ConstantLookup,
    ) -> Self {
        Self {
            registry,
            catalog,
            constants,
            max_depth: DEFAULT_MAX_BUILD_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Compile every identifier; the first failure aborts compilation
    pub fn compile(&self) -> Result<CompiledPlan> {
        tracing::info!(bindings = self.registry.len(), "Compiling resolution plan");

        let mut plan = CompiledPlan::new();
        for (identifier, binding) in self.registry.iter() {
            if self.catalog.contains(identifier) {
                tracing::debug!(identifier, "Skipping type substitution entry");
                continue;
            }
            let token = TokenBuilder::new(
                self.registry,
                self.catalog,
                self.constants,
                BuildMode::Compile,
            )
            .with_max_depth(self.max_depth)
            .build_binding(binding, identifier)?;
            plan.insert(PlanEntry::new(identifier, token).with_source(binding.describe()));
        }

        tracing::info!(entries = plan.len(), "Resolution plan compiled");
        Ok(plan)
    }
}

/// Compile `registry` with default settings
pub fn compile(
    registry: &Registry,
    catalog: &dyn TypeCatalog,
    constants: &dyn ConstantLookup,
) -> Result<CompiledPlan> {
    Compiler::new(registry, catalog, constants).compile()
}
