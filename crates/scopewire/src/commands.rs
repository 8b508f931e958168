//! CLI operations
//!
//! Each command returns the text the binary prints, so the commands can be
//! driven without a process.

use scopewire_application::{ConstantTable, Scope, StaticTypeCatalog};
use scopewire_domain::{ConstantLookup, Result, TypeCatalog};
use scopewire_infrastructure::config::AppConfig;
use scopewire_infrastructure::{ErrorContext, load_bindings};
use std::path::Path;
use std::sync::Arc;

fn catalog() -> Arc<dyn TypeCatalog> {
    Arc::new(StaticTypeCatalog::standard())
}

fn constants() -> Arc<dyn ConstantLookup> {
    Arc::new(ConstantTable::with_builtins())
}

/// Registry-backed scope over a bindings file
pub fn open_scope(bindings: &Path, config: &AppConfig) -> Result<Scope> {
    let registry = load_bindings(bindings)?;
    Ok(Scope::new(registry, catalog(), constants()).with_options(config.resolver.options()))
}

/// Plan-backed scope over a plan document
pub fn open_plan(plan: &Path, config: &AppConfig) -> Result<Scope> {
    let text = std::fs::read_to_string(plan)
        .io_context(format!("Failed to read plan {}", plan.display()))?;
    let plan = config.plan.serializer().load_plan(&text)?;
    Ok(Scope::from_plan(plan, catalog(), constants()).with_options(config.resolver.options()))
}

/// Render the plan compiled from a bindings file
pub fn compile(bindings: &Path, config: &AppConfig) -> Result<String> {
    let plan = open_scope(bindings, config)?.compile_plan()?;
    config.plan.serializer().render_plan(&plan)
}

/// Show the token tree of one identifier, as script text or JSON
pub fn tokenize(
    bindings: &Path,
    identifier: &str,
    json: bool,
    config: &AppConfig,
) -> Result<String> {
    let token = open_scope(bindings, config)?.tokenize(identifier)?;
    if json {
        config.plan.serializer().render(&token)
    } else {
        Ok(token.to_string())
    }
}

/// Resolve one identifier from a bindings file
pub fn get(bindings: &Path, identifier: &str, config: &AppConfig) -> Result<String> {
    Ok(open_scope(bindings, config)?.get(identifier)?.to_string())
}

/// Resolve one identifier from a plan document
pub fn run(plan: &Path, identifier: &str, config: &AppConfig) -> Result<String> {
    Ok(open_plan(plan, config)?.get(identifier)?.to_string())
}

/// Names of every type the binary can build, sorted
pub fn types() -> Vec<String> {
    StaticTypeCatalog::standard()
        .type_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
