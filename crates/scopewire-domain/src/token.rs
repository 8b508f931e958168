//! Compiled plan nodes
//!
//! A [`Token`] describes how to produce a value without producing it. Token
//! trees are self-contained: they never point back into the registry, so a
//! tree built in one process can be rendered, persisted and executed later
//! against any scope whose catalog knows the referenced types.
//!
//! Every variant except [`Token::Invoke`] is serializable. `Invoke` carries a
//! native closure and only exists in trees built for immediate execution.

use crate::value_objects::Invokable;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::fmt;

/// Plan node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Literal data, returned unchanged
    Scalar {
        /// The literal
        value: Json,
    },
    /// Named constant, resolved when the plan was built
    Constant {
        /// Constant name
        name: String,
        /// Constant value
        value: Json,
    },
    /// Construction of a catalog type
    Type {
        /// Identifier the value is built for (handed to factories)
        identifier: String,
        /// Catalog type name
        type_name: String,
        /// One token per constructor parameter, in declaration order
        arguments: Vec<Token>,
        /// Invoke the constructed instance and use its result
        factory: bool,
    },
    /// Redirect to the memoized resolution of another identifier
    Goto {
        /// Target identifier
        target: String,
    },
    /// Native closure call, never serialized
    #[serde(skip)]
    Invoke {
        /// Identifier the closure is bound to
        identifier: String,
        /// The closure
        callable: Invokable,
    },
}

impl Token {
    /// Literal token
    pub fn scalar<V: Into<Json>>(value: V) -> Self {
        Self::Scalar {
            value: value.into(),
        }
    }

    /// Redirect token
    pub fn goto<S: Into<String>>(target: S) -> Self {
        Self::Goto {
            target: target.into(),
        }
    }

    /// Identifier of the first reachable `Invoke` token, depth first
    pub fn find_native(&self) -> Option<&str> {
        match self {
            Self::Invoke { identifier, .. } => Some(identifier.as_str()),
            Self::Type { arguments, .. } => arguments.iter().find_map(Token::find_native),
            Self::Scalar { .. } | Self::Constant { .. } | Self::Goto { .. } => None,
        }
    }

    /// Whether the whole tree can be rendered to text
    pub fn is_serializable(&self) -> bool {
        self.find_native().is_none()
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Self::Type { arguments, .. } => {
                1 + arguments.iter().map(Token::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { value } => write!(f, "{value}"),
            Self::Constant { name, .. } => f.write_str(name),
            Self::Goto { target } => write!(f, "goto({target})"),
            Self::Invoke { identifier, .. } => write!(f, "native({identifier:?})"),
            Self::Type {
                identifier,
                type_name,
                arguments,
                factory,
            } => {
                if *factory {
                    f.write_str("invoke(")?;
                }
                f.write_str(type_name)?;
                if !arguments.is_empty() {
                    f.write_str("(")?;
                    for (index, argument) in arguments.iter().enumerate() {
                        if index > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(")")?;
                }
                if *factory {
                    write!(f, ", {identifier:?})")?;
                }
                Ok(())
            }
        }
    }
}
