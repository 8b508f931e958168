//! Plan persistence
//!
//! Plans are stored as JSON documents:
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": [
//!     { "id": "fighter", "token": { "kind": "type", ... }, "source": "combat::Fighter" }
//!   ]
//! }
//! ```
//!
//! Token trees containing native closures cannot be rendered.

use crate::plan::{CompiledPlan, PlanEntry};
use scopewire_domain::constants::PLAN_FORMAT_VERSION;
use scopewire_domain::{Error, Result, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Serialize, Deserialize)]
struct PlanDocument {
    version: u32,
    entries: Vec<PlanEntry>,
}

/// Renders and loads tokens and plans
#[derive(Debug, Clone, Copy)]
pub struct PlanSerializer {
    pretty: bool,
    include_source: bool,
}

impl Default for PlanSerializer {
    fn default() -> Self {
        Self {
            pretty: true,
            include_source: true,
        }
    }
}

impl PlanSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent rendered JSON
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Keep each entry's raw binding in the document
    #[must_use]
    pub fn with_source(mut self, include_source: bool) -> Self {
        self.include_source = include_source;
        self
    }

    /// Render one token tree
    pub fn render(&self, token: &Token) -> Result<String> {
        ensure_serializable(token)?;
        self.to_json(token)
    }

    /// Load one token tree
    pub fn load(&self, text: &str) -> Result<Token> {
        serde_json::from_str(text).map_err(|e| Error::plan(format!("malformed token: {e}")))
    }

    /// Render a whole plan
    pub fn render_plan(&self, plan: &CompiledPlan) -> Result<String> {
        let entries = plan
            .iter()
            .map(|entry| {
                ensure_serializable(&entry.token)?;
                let mut entry = entry.clone();
                if !self.include_source {
                    entry.source = None;
                }
                Ok(entry)
            })
            .collect::<Result<Vec<_>>>()?;

        self.to_json(&PlanDocument {
            version: PLAN_FORMAT_VERSION,
            entries,
        })
    }

    /// Load a plan document
    pub fn load_plan(&self, text: &str) -> Result<CompiledPlan> {
        let document: PlanDocument = serde_json::from_str(text)
            .map_err(|e| Error::plan(format!("malformed plan document: {e}")))?;

        if document.version != PLAN_FORMAT_VERSION {
            return Err(Error::plan(format!(
                "unsupported plan version {} (expected {PLAN_FORMAT_VERSION})",
                document.version
            )));
        }

        let mut seen = HashSet::new();
        for entry in &document.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::plan(format!("duplicate plan entry \"{}\"", entry.id)));
            }
        }

        tracing::debug!(entries = document.entries.len(), "Plan document loaded");
        Ok(document.entries.into_iter().collect())
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

fn ensure_serializable(token: &Token) -> Result<()> {
    match token.find_native() {
        Some(identifier) => Err(Error::not_serializable(identifier)),
        None => Ok(()),
    }
}
