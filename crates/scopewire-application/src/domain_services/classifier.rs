//! Binding classification
//!
//! Decides what a raw binding means. Rules are tried in order and the first
//! match wins:
//!
//! | Binding | Classification |
//! |---------|----------------|
//! | native closure | invokable (rejected when compiling) |
//! | `""` | error |
//! | `"@name"` | symlink |
//! | `"$name"` | variable |
//! | defined constant name | constant |
//! | catalog type name | type reference |
//! | anything else | scalar |

use crate::registry::Registry;
use scopewire_domain::constants::{SYMLINK_SIGIL, TYPE_PATH_SEPARATOR, VARIABLE_SIGIL};
use scopewire_domain::{
    Binding, ConstantLookup, Error, Invokable, Result, TypeCatalog, TypeDescriptor,
};
use serde_json::Value as Json;

/// What the resolver is producing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Tokens executed right away; native closures allowed
    #[default]
    Execute,
    /// Tokens destined for a plan; native closures rejected
    Compile,
}

/// Meaning of a binding
#[derive(Debug)]
pub enum Classification<'a> {
    /// Plain literal
    Scalar(&'a Json),
    /// Named constant and its value
    Constant { name: &'a str, value: Json },
    /// Catalog type to build
    TypeReference(&'a TypeDescriptor),
    /// `@name` alias resolved to its target identifier
    Symlink { symlink: &'a str, target: String },
    /// `$name` reference to another identifier
    Variable { target: &'a str },
    /// Native closure
    Invokable(&'a Invokable),
}

/// Binding classifier
#[derive(Clone, Copy)]
pub struct Classifier<'a> {
    registry: &'a Registry,
    catalog: &'a dyn TypeCatalog,
    constants: &'a dyn ConstantLookup,
    mode: BuildMode,
}

impl<'a> Classifier<'a> {
    pub fn new(
        registry: &'a Registry,
        catalog: &'a dyn TypeCatalog,
        constants: &'a dyn ConstantLookup,
        mode: BuildMode,
    ) -> Self {
        Self {
            registry,
            catalog,
            constants,
            mode,
        }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Classify the binding found at `identifier`
    pub fn classify(&self, binding: &'a Binding, identifier: &str) -> Result<Classification<'a>> {
        let literal = match binding {
            Binding::Invokable(callable) => {
                return match self.mode {
                    BuildMode::Execute => Ok(Classification::Invokable(callable)),
                    BuildMode::Compile => Err(Error::factory_binding(identifier)),
                };
            }
            Binding::Literal(literal) => literal,
        };

        let Json::String(text) = literal else {
            return Ok(Classification::Scalar(literal));
        };

        if text.is_empty() {
            return Err(Error::empty_binding_value(identifier));
        }
        if text.starts_with(SYMLINK_SIGIL) {
            let target = self.symlink_target(text)?;
            return Ok(Classification::Symlink {
                symlink: text,
                target,
            });
        }
        if let Some(target) = text.strip_prefix(VARIABLE_SIGIL) {
            if !self.registry.contains(target) {
                return Err(Error::unknown_variable(text.as_str()));
            }
            return Ok(Classification::Variable { target });
        }
        if let Some(value) = self.constants.lookup_constant(text) {
            return Ok(Classification::Constant { name: text, value });
        }
        if let Some(descriptor) = self.catalog.describe(text) {
            return Ok(Classification::TypeReference(descriptor));
        }
        if looks_like_type_path(text) {
            tracing::warn!(
                identifier,
                value = %text,
                "Binding looks like a type path but is not in the catalog; treating it as a scalar"
            );
        }
        Ok(Classification::Scalar(literal))
    }

    /// Target identifier of `@name`
    ///
    /// A literal `@name` key acts as an indirection table entry and wins;
    /// otherwise `name` itself must be bound.
    fn symlink_target(&self, symlink: &str) -> Result<String> {
        if let Some(entry) = self.registry.get(symlink) {
            return entry
                .as_str()
                .filter(|target| self.registry.contains(target))
                .map(str::to_string)
                .ok_or_else(|| Error::unknown_symlink(symlink));
        }
        let name = &symlink[SYMLINK_SIGIL.len_utf8()..];
        if self.registry.contains(name) {
            Ok(name.to_string())
        } else {
            Err(Error::unknown_symlink(symlink))
        }
    }
}

/// `segment::segment` made of identifier characters
pub fn looks_like_type_path(text: &str) -> bool {
    text.contains(TYPE_PATH_SEPARATOR)
        && text.split(TYPE_PATH_SEPARATOR).all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|first| first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}
