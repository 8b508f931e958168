//! Raw bindings
//!
//! A binding is what the registry stores for an identifier before the
//! classifier interprets it. Literal bindings are plain data and can be
//! compiled into a plan; invokable bindings are native closures and only live
//! in the process that registered them.

use crate::error::Result;
use crate::ports::ValueResolver;
use crate::value_objects::Value;
use serde_json::Value as Json;
use std::fmt;
use std::sync::Arc;

type InvokeFn = dyn Fn(&dyn ValueResolver, &str) -> Result<Value> + Send + Sync;

/// Native factory closure, invoked as `callable(scope, identifier)`
#[derive(Clone)]
pub struct Invokable(Arc<InvokeFn>);

impl Invokable {
    /// Wrap a closure
    pub fn new<F>(callable: F) -> Self
    where
        F: Fn(&dyn ValueResolver, &str) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(callable))
    }

    /// Call the closure for `identifier`
    pub fn call(&self, resolver: &dyn ValueResolver, identifier: &str) -> Result<Value> {
        (self.0)(resolver, identifier)
    }

    /// Pointer identity
    pub fn ptr_eq(&self, other: &Invokable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Invokable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Invokable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invokable(..)")
    }
}

/// Raw value stored in the registry
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// Declarative data, classified on resolution
    Literal(Json),
    /// Native closure, never serializable
    Invokable(Invokable),
}

impl Binding {
    /// Bind a native closure
    pub fn invokable<F>(callable: F) -> Self
    where
        F: Fn(&dyn ValueResolver, &str) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Invokable(Invokable::new(callable))
    }

    /// Literal data, if any
    pub fn as_literal(&self) -> Option<&Json> {
        match self {
            Self::Literal(json) => Some(json),
            Self::Invokable(_) => None,
        }
    }

    /// String literal contents, if any
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Json::as_str)
    }

    /// Whether this binding is a native closure
    pub fn is_invokable(&self) -> bool {
        matches!(self, Self::Invokable(_))
    }

    /// Human-readable echo of the binding, used as plan entry source
    pub fn describe(&self) -> String {
        match self {
            Self::Literal(Json::String(text)) => text.clone(),
            Self::Literal(json) => json.to_string(),
            Self::Invokable(_) => "<native>".to_string(),
        }
    }
}

impl From<Json> for Binding {
    fn from(value: Json) -> Self {
        Self::Literal(value)
    }
}

impl From<Invokable> for Binding {
    fn from(value: Invokable) -> Self {
        Self::Invokable(value)
    }
}

impl From<&str> for Binding {
    fn from(value: &str) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<String> for Binding {
    fn from(value: String) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<bool> for Binding {
    fn from(value: bool) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<i64> for Binding {
    fn from(value: i64) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Self::Literal(Json::from(value))
    }
}
