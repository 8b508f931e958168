//! Identifier value object
//!
//! Identifiers are dotted paths (`battle.fighter1.name`). The tree they form is
//! virtual: `a.b` names parameter `b` of the value built for `a`, whether or
//! not `a` is itself bound.

use crate::constants::PATH_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Dotted-path key naming a bound value or a virtual constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from any string-like value
    pub fn new<S: Into<String>>(identifier: S) -> Self {
        Self(identifier.into())
    }

    /// Compound path of parameter `param` under `anchor`
    ///
    /// ```
    /// use scopewire_domain::Identifier;
    ///
    /// assert_eq!(Identifier::join("battle", "fighter1").as_str(), "battle.fighter1");
    /// ```
    pub fn join(anchor: &str, param: &str) -> Self {
        let mut path = String::with_capacity(anchor.len() + param.len() + 1);
        path.push_str(anchor);
        path.push(PATH_SEPARATOR);
        path.push_str(param);
        Self(path)
    }

    /// Compound path of parameter `param` under this identifier
    pub fn child(&self, param: &str) -> Self {
        Self::join(&self.0, param)
    }

    /// The identifier this one is a parameter of, if any
    pub fn parent(&self) -> Option<Identifier> {
        self.0
            .rsplit_once(PATH_SEPARATOR)
            .map(|(parent, _)| Identifier::new(parent))
    }

    /// Final path segment (the parameter name for compound paths)
    pub fn last_segment(&self) -> &str {
        self.0
            .rsplit_once(PATH_SEPARATOR)
            .map_or(self.0.as_str(), |(_, last)| last)
    }

    /// All path segments, outermost first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}
