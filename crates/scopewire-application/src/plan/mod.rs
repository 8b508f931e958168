//! Compiled resolution plans
//!
//! A [`CompiledPlan`] holds one token tree per registry identifier. Plans are
//! produced by [`compile`], persisted with [`PlanSerializer`], and executed by
//! a plan-backed [`Scope`](crate::Scope).

pub mod compiler;
pub mod serializer;

pub use compiler::{Compiler, compile};
pub use serializer::PlanSerializer;

use indexmap::IndexMap;
use scopewire_domain::Token;
use serde::{Deserialize, Serialize};

/// One compiled identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Identifier
    pub id: String,
    /// Token tree producing the identifier's value
    pub token: Token,
    /// Raw binding the token was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl PlanEntry {
    pub fn new<S: Into<String>>(id: S, token: Token) -> Self {
        Self {
            id: id.into(),
            token,
            source: None,
        }
    }

    #[must_use]
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Ordered identifier -> token map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledPlan {
    entries: IndexMap<String, PlanEntry>,
}

impl CompiledPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, entry: PlanEntry) -> Option<PlanEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    /// Token compiled for `identifier`
    pub fn token(&self, identifier: &str) -> Option<&Token> {
        self.entries.get(identifier).map(|entry| &entry.token)
    }

    pub fn entry(&self, identifier: &str) -> Option<&PlanEntry> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in compile order
    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.values()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<PlanEntry> for CompiledPlan {
    fn from_iter<T: IntoIterator<Item = PlanEntry>>(iter: T) -> Self {
        let mut plan = Self::new();
        for entry in iter {
            plan.insert(entry);
        }
        plan
    }
}
