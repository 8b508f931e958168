//! Resolution services
//!
//! The pieces the [`Scope`](crate::Scope) and the plan compiler are built
//! from:
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`PathResolver`] | Identifier and parameter-path lookup |
//! | [`Classifier`] | Meaning of a raw binding |
//! | [`TokenBuilder`] | Binding -> token tree |
//! | [`Executor`] | Token tree -> value |

pub mod classifier;
pub mod executor;
pub mod path_resolver;
pub mod token_builder;

pub use classifier::{BuildMode, Classification, Classifier, looks_like_type_path};
pub use executor::Executor;
pub use path_resolver::{ParameterSource, PathResolver};
pub use token_builder::TokenBuilder;
