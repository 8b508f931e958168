//! Token execution
//!
//! Evaluates a [`Token`] into a [`Value`]. `Goto` nodes and native closures
//! go back through the resolver, so shared identifiers stay memoized.

use scopewire_domain::{Arguments, Error, Result, Token, TypeCatalog, Value, ValueResolver};

/// Token evaluator
#[derive(Clone, Copy)]
pub struct Executor<'a> {
    catalog: &'a dyn TypeCatalog,
    resolver: &'a dyn ValueResolver,
}

impl<'a> Executor<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, resolver: &'a dyn ValueResolver) -> Self {
        Self { catalog, resolver }
    }

    /// Evaluate `token`
    pub fn execute(&self, token: &Token) -> Result<Value> {
        match token {
            Token::Scalar { value } | Token::Constant { value, .. } => {
                Ok(Value::Literal(value.clone()))
            }
            Token::Goto { target } => self.resolver.resolve(target),
            Token::Invoke {
                identifier,
                callable,
            } => callable.call(self.resolver, identifier),
            Token::Type {
                identifier,
                type_name,
                arguments,
                factory,
            } => {
                let descriptor = self.catalog.describe(type_name).ok_or_else(|| {
                    Error::plan(format!("type \"{type_name}\" is not in the catalog"))
                })?;
                if *factory != descriptor.is_factory() {
                    let planned = if *factory { "a factory" } else { "a plain type" };
                    return Err(Error::plan(format!(
                        "type \"{type_name}\" is planned as {planned} but the catalog disagrees"
                    )));
                }

                let values = arguments
                    .iter()
                    .map(|argument| self.execute(argument))
                    .collect::<Result<Vec<_>>>()?;
                let instance = descriptor.construct(Arguments::new(type_name.as_str(), values))?;

                if *factory {
                    tracing::trace!(
                        identifier = %identifier,
                        type_name = %type_name,
                        "Invoking factory"
                    );
                    descriptor.invoke(&instance, self.resolver, identifier)
                } else {
                    Ok(instance)
                }
            }
        }
    }
}
