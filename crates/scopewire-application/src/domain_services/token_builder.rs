//! Token building
//!
//! Turns a binding into a [`Token`] tree by following parameter paths,
//! substituting abstract types, and classifying every leaf. Each type being
//! built pushes an `identifier: type` frame; seeing the same frame twice, or
//! exceeding the depth limit, is reported as a cyclic binding.

use crate::domain_services::classifier::{BuildMode, Classification, Classifier};
use crate::domain_services::path_resolver::{ParameterSource, PathResolver};
use crate::registry::Registry;
use scopewire_domain::constants::DEFAULT_MAX_BUILD_DEPTH;
use scopewire_domain::{
    Binding, ConstantLookup, Error, ParameterSpec, Result, Token, TypeCatalog, TypeDescriptor,
    TypeShape,
};

/// Recursive token builder
pub struct TokenBuilder<'a> {
    catalog: &'a dyn TypeCatalog,
    paths: PathResolver<'a>,
    classifier: Classifier<'a>,
    max_depth: usize,
    frames: Vec<String>,
}

impl<'a> TokenBuilder<'a> {
    pub fn new(
        registry: &'a Registry,
        catalog: &'a dyn TypeCatalog,
        constants: &'a dyn ConstantLookup,
        mode: BuildMode,
    ) -> Self {
        Self {
            catalog,
            paths: PathResolver::new(registry, catalog),
            classifier: Classifier::new(registry, catalog, constants, mode),
            max_depth: DEFAULT_MAX_BUILD_DEPTH,
            frames: Vec::new(),
        }
    }

    /// Limit on nested type frames
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Token for a top-level identifier
    pub fn build(&mut self, identifier: &str) -> Result<Token> {
        let binding = self.paths.resolve(identifier)?;
        self.build_binding(binding, identifier)
    }

    /// Token constructing `type_name` at `anchor`
    ///
    /// `anchor` needs no binding of its own; parameters are still looked up
    /// under `anchor.param`.
    pub fn build_instance(&mut self, type_name: &str, anchor: &str) -> Result<Token> {
        let descriptor = self
            .catalog
            .describe(type_name)
            .ok_or_else(|| Error::construction(type_name, "type is not in the catalog"))?;
        self.build_type(descriptor, anchor)
    }

    /// Token for `binding` as found at `identifier`
    pub fn build_binding(&mut self, binding: &'a Binding, identifier: &str) -> Result<Token> {
        match self.classifier.classify(binding, identifier)? {
            Classification::Scalar(value) => Ok(Token::scalar(value.clone())),
            Classification::Constant { name, value } => Ok(Token::Constant {
                name: name.to_string(),
                value,
            }),
            Classification::TypeReference(descriptor) => self.build_type(descriptor, identifier),
            Classification::Symlink { symlink, target } => {
                tracing::trace!(identifier, symlink, target = %target, "Following symlink");
                Ok(Token::goto(target))
            }
            Classification::Variable { target } => Ok(Token::goto(target)),
            Classification::Invokable(callable) => Ok(Token::Invoke {
                identifier: identifier.to_string(),
                callable: callable.clone(),
            }),
        }
    }

    fn build_type(&mut self, descriptor: &'a TypeDescriptor, identifier: &str) -> Result<Token> {
        self.enter(format!("{identifier}: {}", descriptor.name()))?;
        let token = self.build_type_frame(descriptor, identifier);
        self.frames.pop();
        token
    }

    fn build_type_frame(
        &mut self,
        descriptor: &'a TypeDescriptor,
        identifier: &str,
    ) -> Result<Token> {
        let parameters = match descriptor.shape() {
            TypeShape::NonInstantiable => {
                let substitute = self
                    .paths
                    .substitute(descriptor.name())
                    .ok_or_else(|| Error::no_implementation_found(descriptor.name(), identifier))?;
                tracing::trace!(
                    identifier,
                    type_name = descriptor.name(),
                    substitute = %substitute.describe(),
                    "Substituting abstract type"
                );
                return self.build_binding(substitute, identifier);
            }
            TypeShape::NoConstructor => &[][..],
            TypeShape::Constructible(parameters) => parameters.as_slice(),
        };

        let arguments = parameters
            .iter()
            .map(|parameter| self.build_parameter(identifier, parameter))
            .collect::<Result<Vec<_>>>()?;

        Ok(Token::Type {
            identifier: identifier.to_string(),
            type_name: descriptor.name().to_string(),
            arguments,
            factory: descriptor.is_factory(),
        })
    }

    fn build_parameter(&mut self, anchor: &str, parameter: &'a ParameterSpec) -> Result<Token> {
        match self.paths.parameter(anchor, parameter)? {
            ParameterSource::Bound { path, binding } => self.build_binding(binding, path.as_str()),
            ParameterSource::Typed { path, descriptor } => {
                self.build_type(descriptor, path.as_str())
            }
            ParameterSource::Default { value } => Ok(Token::scalar(value.clone())),
        }
    }

    fn enter(&mut self, frame: String) -> Result<()> {
        if self.frames.contains(&frame) || self.frames.len() >= self.max_depth {
            let chain = self.frames.iter().cloned().chain(std::iter::once(frame));
            return Err(Error::cyclic_binding(chain));
        }
        self.frames.push(frame);
        Ok(())
    }
}
