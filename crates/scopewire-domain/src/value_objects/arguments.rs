//! Constructor arguments
//!
//! Catalog constructors receive their resolved parameters as [`Arguments`],
//! in declaration order. The typed accessors turn shape mismatches into
//! `Construction` errors naming the type and parameter position.

use crate::error::{Error, Result};
use crate::value_objects::{Instance, Value};
use serde_json::Value as Json;
use std::any::Any;
use std::sync::Arc;

/// Ordered argument list for one constructor call
#[derive(Debug, Clone)]
pub struct Arguments {
    type_name: String,
    values: Vec<Value>,
}

impl Arguments {
    /// Create the argument list for `type_name`
    pub fn new<S: Into<String>>(type_name: S, values: Vec<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            values,
        }
    }

    /// Type the arguments are destined for
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument at `index`
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            self.mismatch(
                index,
                &format!("missing argument (only {} supplied)", self.values.len()),
            )
        })
    }

    /// Literal argument at `index`
    pub fn literal(&self, index: usize) -> Result<&Json> {
        self.get(index)?
            .as_literal()
            .ok_or_else(|| self.mismatch(index, "expected literal data, got an instance"))
    }

    /// String argument at `index`
    pub fn string(&self, index: usize) -> Result<String> {
        self.literal(index)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(index, "expected a string"))
    }

    /// Boolean argument at `index`
    pub fn bool(&self, index: usize) -> Result<bool> {
        self.literal(index)?
            .as_bool()
            .ok_or_else(|| self.mismatch(index, "expected a boolean"))
    }

    /// Integer argument at `index`
    pub fn i64(&self, index: usize) -> Result<i64> {
        self.literal(index)?
            .as_i64()
            .ok_or_else(|| self.mismatch(index, "expected an integer"))
    }

    /// Floating point argument at `index`
    pub fn f64(&self, index: usize) -> Result<f64> {
        self.literal(index)?
            .as_f64()
            .ok_or_else(|| self.mismatch(index, "expected a number"))
    }

    /// Instance argument at `index`
    pub fn instance(&self, index: usize) -> Result<&Instance> {
        self.get(index)?
            .as_instance()
            .ok_or_else(|| self.mismatch(index, "expected an instance, got literal data"))
    }

    /// Instance argument at `index` as concrete type `T`
    pub fn downcast<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        let instance = self.instance(index)?;
        instance.downcast::<T>().ok_or_else(|| {
            self.mismatch(
                index,
                &format!(
                    "expected {}, got {}",
                    std::any::type_name::<T>(),
                    instance.type_name()
                ),
            )
        })
    }

    fn mismatch(&self, index: usize, message: &str) -> Error {
        Error::construction(&self.type_name, format!("argument {index}: {message}"))
    }
}
