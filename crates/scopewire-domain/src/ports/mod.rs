//! Domain Port Interfaces
//!
//! Collaborators the resolution engine depends on but does not implement:
//!
//! | Port | Role |
//! |------|------|
//! | [`TypeCatalog`] | constructor descriptors by type name |
//! | [`ConstantLookup`] | named constant values |
//! | [`ValueResolver`] | memoized resolution, handed to factories |

pub mod catalog;
pub mod constants;
pub mod resolver;

pub use catalog::{ParameterSpec, TypeCatalog, TypeDescriptor, TypeShape};
pub use constants::ConstantLookup;
pub use resolver::ValueResolver;
