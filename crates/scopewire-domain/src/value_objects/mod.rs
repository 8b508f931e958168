//! Value objects of the resolver domain

pub mod arguments;
pub mod binding;
pub mod identifier;
pub mod value;

pub use arguments::Arguments;
pub use binding::{Binding, Invokable};
pub use identifier::Identifier;
pub use value::{Instance, Value};
