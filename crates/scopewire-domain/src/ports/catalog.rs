//! Type Catalog Port
//!
//! Describes the constructible types the resolver may instantiate. Rust has no
//! runtime reflection over constructor signatures, so every type is described
//! up front by a [`TypeDescriptor`]: its shape, its parameters in declaration
//! order, a constructor closure and, for factory types, an invoke closure.
//!
//! ## Example
//!
//! ```
//! use scopewire_domain::ports::{ParameterSpec, TypeDescriptor};
//! use scopewire_domain::Value;
//!
//! struct Fighter {
//!     name: String,
//! }
//!
//! let descriptor = TypeDescriptor::constructible(
//!     "combat::Fighter",
//!     vec![ParameterSpec::new("name")],
//!     |args| Ok(Value::instance("combat::Fighter", Fighter { name: args.string(0)? })),
//! );
//! assert_eq!(descriptor.parameters().len(), 1);
//! ```

use crate::error::{Error, Result};
use crate::ports::ValueResolver;
use crate::value_objects::{Arguments, Value};
use serde_json::Value as Json;
use std::fmt;
use std::sync::Arc;

type ConstructFn = dyn Fn(Arguments) -> Result<Value> + Send + Sync;
type InvokeFn = dyn Fn(&Value, &dyn ValueResolver, &str) -> Result<Value> + Send + Sync;

/// One declared constructor parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name, appended to the anchor to form its compound path
    pub name: String,
    /// Catalog type the parameter is declared as, if any
    pub declared_type: Option<String>,
    /// Default literal used when nothing else resolves
    pub default: Option<Json>,
}

impl ParameterSpec {
    /// Untyped parameter without default
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            default: None,
        }
    }

    /// Parameter declared as catalog type `type_name`
    pub fn typed<S: Into<String>, T: Into<String>>(name: S, type_name: T) -> Self {
        Self::new(name).of_type(type_name)
    }

    /// Set the declared type
    pub fn of_type<T: Into<String>>(mut self, type_name: T) -> Self {
        self.declared_type = Some(type_name.into());
        self
    }

    /// Set the default value
    pub fn with_default<V: Into<Json>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Instantiation capability of a type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    /// Built from arguments, in declaration order
    Constructible(Vec<ParameterSpec>),
    /// Built without arguments
    NoConstructor,
    /// Abstract: resolved through a substitute bound under the type name
    NonInstantiable,
}

/// Everything the resolver knows about one type
#[derive(Clone)]
pub struct TypeDescriptor {
    name: String,
    shape: TypeShape,
    constructor: Option<Arc<ConstructFn>>,
    invoker: Option<Arc<InvokeFn>>,
}

impl TypeDescriptor {
    /// Type built from `parameters`
    pub fn constructible<S, F>(name: S, parameters: Vec<ParameterSpec>, construct: F) -> Self
    where
        S: Into<String>,
        F: Fn(Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            shape: TypeShape::Constructible(parameters),
            constructor: Some(Arc::new(construct)),
            invoker: None,
        }
    }

    /// Type built without arguments
    pub fn without_constructor<S, F>(name: S, construct: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            shape: TypeShape::NoConstructor,
            constructor: Some(Arc::new(move |_| construct())),
            invoker: None,
        }
    }

    /// Abstract type (trait, interface)
    pub fn non_instantiable<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            shape: TypeShape::NonInstantiable,
            constructor: None,
            invoker: None,
        }
    }

    /// Mark the type as a factory: constructed instances are invoked with
    /// `(scope, identifier)` and the invocation result is used instead
    #[must_use]
    pub fn with_invoker<F>(mut self, invoke: F) -> Self
    where
        F: Fn(&Value, &dyn ValueResolver, &str) -> Result<Value> + Send + Sync + 'static,
    {
        self.invoker = Some(Arc::new(invoke));
        self
    }

    /// Catalog name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instantiation shape
    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    /// Declared constructor parameters (empty unless constructible)
    pub fn parameters(&self) -> &[ParameterSpec] {
        match &self.shape {
            TypeShape::Constructible(parameters) => parameters,
            TypeShape::NoConstructor | TypeShape::NonInstantiable => &[],
        }
    }

    /// Whether the type can be built directly
    pub fn is_instantiable(&self) -> bool {
        !matches!(self.shape, TypeShape::NonInstantiable)
    }

    /// Whether constructed instances are themselves invoked
    pub fn is_factory(&self) -> bool {
        self.invoker.is_some()
    }

    /// Build an instance from resolved arguments
    pub fn construct(&self, arguments: Arguments) -> Result<Value> {
        let expected = self.parameters().len();
        if arguments.len() != expected {
            return Err(Error::construction(
                &self.name,
                format!("expected {expected} arguments, got {}", arguments.len()),
            ));
        }
        match &self.constructor {
            Some(construct) => construct(arguments),
            None => Err(Error::construction(&self.name, "type is not instantiable")),
        }
    }

    /// Invoke a constructed instance, or hand it back for non-factory types
    pub fn invoke(
        &self,
        instance: &Value,
        resolver: &dyn ValueResolver,
        identifier: &str,
    ) -> Result<Value> {
        match &self.invoker {
            Some(invoke) => invoke(instance, resolver, identifier),
            None => Ok(instance.clone()),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("factory", &self.is_factory())
            .finish()
    }
}

/// Lookup of type descriptors by catalog name
pub trait TypeCatalog: Send + Sync {
    /// Descriptor registered under `type_name`
    fn describe(&self, type_name: &str) -> Option<&TypeDescriptor>;

    /// Whether `type_name` is a catalog type
    fn contains(&self, type_name: &str) -> bool {
        self.describe(type_name).is_some()
    }
}
