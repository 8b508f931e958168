//! Built-in proxy type
//!
//! `scopewire::Proxy` is a factory that stands in for another identifier.
//! Its single `from` parameter is either an identifier to resolve, or a list
//! whose first element is an identifier and whose remaining elements dig into
//! the resolved literal one key (or index) at a time.
//!
//! ```text
//! battle.fighter1      = "scopewire::Proxy"
//! battle.fighter1.from = "fighter"               # same value as `fighter`
//! settings.port.from   = ["config", "http", "port"]
//! ```

use scopewire_domain::{Error, ParameterSpec, Result, TypeDescriptor, Value, ValueResolver};
use serde_json::Value as Json;

/// Catalog name of the proxy type
pub const PROXY_TYPE: &str = "scopewire::Proxy";

/// Constructed proxy, waiting to be invoked
#[derive(Debug, Clone, PartialEq)]
pub struct Proxy {
    from: Json,
}

impl Proxy {
    /// Proxy following `from`
    pub fn new<V: Into<Json>>(from: V) -> Self {
        Self { from: from.into() }
    }

    /// Raw `from` argument
    pub fn from_path(&self) -> &Json {
        &self.from
    }

    /// Resolve the proxied value on behalf of `identifier`
    pub fn follow(&self, resolver: &dyn ValueResolver, identifier: &str) -> Result<Value> {
        match &self.from {
            Json::String(target) => resolver.resolve(target),
            Json::Array(fragments) => {
                let Some((root, rest)) = fragments.split_first() else {
                    return Err(Error::construction(PROXY_TYPE, "proxy path is empty"));
                };
                let root = root.as_str().ok_or_else(|| {
                    Error::construction(
                        PROXY_TYPE,
                        format!("proxy root must be an identifier, got {root}"),
                    )
                })?;
                let mut value = resolver.resolve(root)?;
                for fragment in rest {
                    value = dig(&value, fragment, identifier)?;
                }
                Ok(value)
            }
            other => Err(Error::construction(
                PROXY_TYPE,
                format!("expected an identifier or a list of fragments, got {other}"),
            )),
        }
    }
}

/// Descriptor registered by `TypeCatalogBuilder::with_builtins`
pub fn proxy_descriptor() -> TypeDescriptor {
    TypeDescriptor::constructible(PROXY_TYPE, vec![ParameterSpec::new("from")], |args| {
        Ok(Value::instance(PROXY_TYPE, Proxy::new(args.literal(0)?.clone())))
    })
    .with_invoker(|instance, resolver, identifier| {
        let proxy = instance
            .downcast_ref::<Proxy>()
            .ok_or_else(|| Error::construction(PROXY_TYPE, "invoked on a foreign instance"))?;
        proxy.follow(resolver, identifier)
    })
}

fn dig(value: &Value, fragment: &Json, identifier: &str) -> Result<Value> {
    let found = match value.as_literal() {
        Some(Json::Object(map)) => fragment_key(fragment).and_then(|key| map.get(&key)),
        Some(Json::Array(items)) => fragment_index(fragment).and_then(|index| items.get(index)),
        _ => None,
    };
    found.cloned().map(Value::Literal).ok_or_else(|| {
        let shown = fragment_key(fragment).unwrap_or_else(|| fragment.to_string());
        Error::proxy_fragment_not_found(shown, identifier)
    })
}

fn fragment_key(fragment: &Json) -> Option<String> {
    match fragment {
        Json::String(key) => Some(key.clone()),
        Json::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn fragment_index(fragment: &Json) -> Option<usize> {
    match fragment {
        Json::Number(number) => number.as_u64().and_then(|index| usize::try_from(index).ok()),
        Json::String(key) => key.parse().ok(),
        _ => None,
    }
}
