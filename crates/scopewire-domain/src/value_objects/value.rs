//! Resolved values
//!
//! A resolution produces either plain literal data or a constructed object.
//! Objects are type-erased behind `Arc<dyn Any>` so that memoized results can
//! be handed out repeatedly while keeping pointer identity.

use serde_json::Value as Json;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased constructed object tagged with its catalog type name
#[derive(Clone)]
pub struct Instance {
    type_name: Arc<str>,
    object: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap a freshly constructed object
    pub fn new<T: Any + Send + Sync>(type_name: &str, object: T) -> Self {
        Self::from_arc(type_name, Arc::new(object))
    }

    /// Wrap an already shared object without re-allocating it
    pub fn from_arc<T: Any + Send + Sync>(type_name: &str, object: Arc<T>) -> Self {
        Self {
            type_name: Arc::from(type_name),
            object,
        }
    }

    /// Catalog name of the type that produced the object
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Shared handle to the object as a concrete type
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.object).downcast::<T>().ok()
    }

    /// Borrow the object as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object.as_ref().downcast_ref::<T>()
    }

    /// Whether the object is of concrete type `T`
    pub fn is<T: Any>(&self) -> bool {
        self.object.as_ref().is::<T>()
    }

    /// Pointer identity
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .field("address", &Arc::as_ptr(&self.object).cast::<()>())
            .finish()
    }
}

/// Result of resolving an identifier
#[derive(Clone)]
pub enum Value {
    /// Plain data (string, number, bool, null, list, map)
    Literal(Json),
    /// Constructed object
    Instance(Instance),
}

impl Value {
    /// Construct an instance value
    pub fn instance<T: Any + Send + Sync>(type_name: &str, object: T) -> Self {
        Self::Instance(Instance::new(type_name, object))
    }

    /// The null literal
    pub fn null() -> Self {
        Self::Literal(Json::Null)
    }

    /// Literal data, if this is not an instance
    pub fn as_literal(&self) -> Option<&Json> {
        match self {
            Self::Literal(json) => Some(json),
            Self::Instance(_) => None,
        }
    }

    /// Constructed object, if this is an instance
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            Self::Literal(_) => None,
        }
    }

    /// String literal contents
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Json::as_str)
    }

    /// Boolean literal contents
    pub fn as_bool(&self) -> Option<bool> {
        self.as_literal().and_then(Json::as_bool)
    }

    /// Integer literal contents
    pub fn as_i64(&self) -> Option<i64> {
        self.as_literal().and_then(Json::as_i64)
    }

    /// Floating point literal contents
    pub fn as_f64(&self) -> Option<f64> {
        self.as_literal().and_then(Json::as_f64)
    }

    /// Shared handle to an instance of concrete type `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.as_instance().and_then(Instance::downcast::<T>)
    }

    /// Borrow an instance of concrete type `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_instance().and_then(Instance::downcast_ref::<T>)
    }

    /// Catalog type name for instances, `None` for literals
    pub fn type_name(&self) -> Option<&str> {
        self.as_instance().map(Instance::type_name)
    }

    /// Identity comparison: pointer equality for instances, structural
    /// equality for literals
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(json) => f.debug_tuple("Literal").field(json).finish(),
            Self::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Json::String(text)) => f.write_str(text),
            Self::Literal(json) => write!(f, "{json}"),
            Self::Instance(instance) => write!(f, "<{}>", instance.type_name()),
        }
    }
}

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        Self::Literal(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Self::Instance(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Literal(Json::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Literal(Json::from(value))
    }
}
