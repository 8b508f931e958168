//! Named constant table
//!
//! Backs the [`ConstantLookup`] port. Binding values equal to a defined
//! constant name (`i64::MAX`, `app::VERSION`) resolve to the constant's value.

use scopewire_domain::ConstantLookup;
use serde_json::{Value as Json, json};
use std::collections::HashMap;

/// In-memory named constants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantTable {
    values: HashMap<String, Json>,
}

impl ConstantTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the numeric limits and math constants
    pub fn with_builtins() -> Self {
        Self::new()
            .define("i8::MIN", i8::MIN)
            .define("i8::MAX", i8::MAX)
            .define("i16::MIN", i16::MIN)
            .define("i16::MAX", i16::MAX)
            .define("i32::MIN", i32::MIN)
            .define("i32::MAX", i32::MAX)
            .define("i64::MIN", i64::MIN)
            .define("i64::MAX", i64::MAX)
            .define("u8::MAX", u8::MAX)
            .define("u16::MAX", u16::MAX)
            .define("u32::MAX", u32::MAX)
            .define("u64::MAX", u64::MAX)
            .define("f64::EPSILON", json!(f64::EPSILON))
            .define("f64::consts::PI", json!(std::f64::consts::PI))
            .define("f64::consts::E", json!(std::f64::consts::E))
    }

    /// Define (or redefine) a constant
    #[must_use]
    pub fn define<K: Into<String>, V: Into<Json>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// In-place variant of [`ConstantTable::define`]
    pub fn insert<K: Into<String>, V: Into<Json>>(&mut self, name: K, value: V) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Number of constants
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConstantLookup for ConstantTable {
    fn lookup_constant(&self, name: &str) -> Option<Json> {
        self.values.get(name).cloned()
    }
}

impl<K: Into<String>> FromIterator<(K, Json)> for ConstantTable {
    fn from_iter<T: IntoIterator<Item = (K, Json)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}
