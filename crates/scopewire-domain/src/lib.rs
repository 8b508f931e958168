//! # scopewire domain
//!
//! Core types of the path-keyed object-graph resolver: identifiers, raw
//! bindings, resolved values, compiled plan tokens, the domain error and the
//! ports the resolution engine depends on.
//!
//! This crate contains no resolution logic; the engine lives in
//! `scopewire-application`.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `Identifier`, `Binding`, `Value`, `Arguments` |
//! | [`token`] | Compiled plan nodes |
//! | [`ports`] | Type catalog, constant lookup and resolver traits |
//! | [`error`] | Domain error and `Result` alias |
//! | [`constants`] | Binding syntax and plan format constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod token;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    ConstantLookup, ParameterSpec, TypeCatalog, TypeDescriptor, TypeShape, ValueResolver,
};
pub use token::Token;
pub use value_objects::{Arguments, Binding, Identifier, Instance, Invokable, Value};
