//! Bindings files
//!
//! Loads a [`Registry`] from a JSON or TOML document whose top-level keys
//! are identifiers. Dotted identifiers must be quoted in TOML, otherwise they
//! are read as nested tables:
//!
//! ```toml
//! fighter = "combat::Fighter"
//! "fighter.name" = "Baraka"
//! ```
//!
//! JSON documents keep their key order; it becomes the registry order.

use crate::error_ext::ErrorContext;
use scopewire_application::Registry;
use scopewire_domain::{Error, Result};
use serde_json::{Map, Value as Json};
use std::path::Path;

/// Bindings document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsFormat {
    Json,
    Toml,
}

impl BindingsFormat {
    /// Format implied by the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(Error::config(format!(
                "Unsupported bindings file {}: expected a .json or .toml extension",
                path.display()
            ))),
        }
    }
}

/// Read a bindings file
pub fn load_bindings<P: AsRef<Path>>(path: P) -> Result<Registry> {
    let path = path.as_ref();
    let format = BindingsFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .io_context(format!("Failed to read bindings file {}", path.display()))?;

    let registry = parse_bindings(&text, format)?;
    tracing::debug!(path = %path.display(), bindings = registry.len(), "Bindings loaded");
    Ok(registry)
}

/// Parse a bindings document
pub fn parse_bindings(text: &str, format: BindingsFormat) -> Result<Registry> {
    let document: Map<String, Json> = match format {
        BindingsFormat::Json => serde_json::from_str(text)?,
        BindingsFormat::Toml => toml::from_str(text).config_context("Invalid TOML bindings")?,
    };
    Ok(Registry::from_literals(document))
}
