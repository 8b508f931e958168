//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for scopewire
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of an identifier that the registry does not define
    #[error("Identifier \"{identifier}\" is undefined.")]
    UndefinedIdentifier {
        /// The missing identifier
        identifier: String,
    },

    /// A constructor parameter with no binding, no resolvable type and no default
    #[error("Unresolved parameter \"{path}\": no binding, declared type or default value")]
    UnresolvedParameter {
        /// Compound path of the parameter (`anchor.param`)
        path: String,
    },

    /// A non-instantiable type without a substitute binding
    #[error("No implementation found for \"{type_name}\" in the path \"{path}\".")]
    NoImplementationFound {
        /// The abstract type name
        type_name: String,
        /// Identifier being resolved when substitution was attempted
        path: String,
    },

    /// `@name` indirection whose target cannot be found
    #[error("Unknown {symlink} symlink")]
    UnknownSymlink {
        /// The symlink literal, sigil included
        symlink: String,
    },

    /// `$name` indirection whose target identifier does not resolve
    #[error("Unknown {variable} variable")]
    UnknownVariable {
        /// The variable literal, sigil included
        variable: String,
    },

    /// A native factory binding reached while compiling a plan
    #[error("Identifier \"{identifier}\" is bound to a native factory and cannot be compiled")]
    FactoryBinding {
        /// Identifier holding the factory
        identifier: String,
    },

    /// A token tree that cannot be rendered to text
    #[error("Token for \"{identifier}\" is not serializable")]
    NotSerializable {
        /// Identifier of the offending token
        identifier: String,
    },

    /// Empty string stored as a binding
    #[error("Identifier \"{identifier}\" has an empty binding value")]
    EmptyBindingValue {
        /// Identifier holding the empty string
        identifier: String,
    },

    /// Resolution revisited a binding that is still being resolved
    #[error("Cyclic binding detected: {chain}")]
    CyclicBinding {
        /// Human-readable resolution chain, outermost first
        chain: String,
    },

    /// A catalog constructor or factory rejected its input
    #[error("Failed to construct \"{type_name}\": {message}")]
    Construction {
        /// Type being constructed
        type_name: String,
        /// Description of the failure
        message: String,
    },

    /// Proxy path fragment missing from the proxied value
    #[error("The proxied fragment \"{fragment}\" not found in the path \"{path}\"")]
    ProxyFragmentNotFound {
        /// The missing fragment
        fragment: String,
        /// Identifier of the proxy
        path: String,
    },

    /// Malformed or incompatible plan document
    #[error("Plan error: {message}")]
    Plan {
        /// Description of the plan error
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an undefined identifier error
    pub fn undefined_identifier<S: Into<String>>(identifier: S) -> Self {
        Self::UndefinedIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create an unresolved parameter error
    pub fn unresolved_parameter<S: Into<String>>(path: S) -> Self {
        Self::UnresolvedParameter { path: path.into() }
    }

    /// Create a missing implementation error
    pub fn no_implementation_found<T: Into<String>, P: Into<String>>(
        type_name: T,
        path: P,
    ) -> Self {
        Self::NoImplementationFound {
            type_name: type_name.into(),
            path: path.into(),
        }
    }

    /// Create an unknown symlink error
    pub fn unknown_symlink<S: Into<String>>(symlink: S) -> Self {
        Self::UnknownSymlink {
            symlink: symlink.into(),
        }
    }

    /// Create an unknown variable error
    pub fn unknown_variable<S: Into<String>>(variable: S) -> Self {
        Self::UnknownVariable {
            variable: variable.into(),
        }
    }

    /// Create a cyclic binding error from the resolution chain
    pub fn cyclic_binding<I, S>(chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chain = chain
            .into_iter()
            .map(|link| link.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CyclicBinding { chain }
    }
}

// Binding and plan error creation methods
impl Error {
    /// Create a factory binding error
    pub fn factory_binding<S: Into<String>>(identifier: S) -> Self {
        Self::FactoryBinding {
            identifier: identifier.into(),
        }
    }

    /// Create a not serializable error
    pub fn not_serializable<S: Into<String>>(identifier: S) -> Self {
        Self::NotSerializable {
            identifier: identifier.into(),
        }
    }

    /// Create an empty binding value error
    pub fn empty_binding_value<S: Into<String>>(identifier: S) -> Self {
        Self::EmptyBindingValue {
            identifier: identifier.into(),
        }
    }

    /// Create a construction error
    pub fn construction<T: Into<String>, M: Into<String>>(type_name: T, message: M) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a proxy fragment error
    pub fn proxy_fragment_not_found<F: Into<String>, P: Into<String>>(
        fragment: F,
        path: P,
    ) -> Self {
        Self::ProxyFragmentNotFound {
            fragment: fragment.into(),
            path: path.into(),
        }
    }

    /// Create a plan error
    pub fn plan<S: Into<String>>(message: S) -> Self {
        Self::Plan {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error (with source)
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the error reports a missing identifier
    ///
    /// Callers probing optional identifiers use this instead of matching on
    /// the variant so that nested failures are never mistaken for absence.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::UndefinedIdentifier { .. })
    }
}
