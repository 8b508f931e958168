//! Unit tests for the type catalog and constant table

use scopewire_application::catalog::{
    ConstantTable, PROXY_TYPE, StaticTypeCatalog, TYPE_REGISTRATIONS, TypeRegistration,
    list_registered_types,
};
use scopewire_domain::{ConstantLookup, ParameterSpec, TypeCatalog, TypeDescriptor, Value};
use serde_json::json;

const REGISTERED: &str = "tests::Registered";

struct Registered;

fn registered_descriptor() -> TypeDescriptor {
    TypeDescriptor::without_constructor(REGISTERED, || Ok(Value::instance(REGISTERED, Registered)))
}

#[linkme::distributed_slice(TYPE_REGISTRATIONS)]
static REGISTERED_TYPE: TypeRegistration = TypeRegistration {
    name: REGISTERED,
    description: "Type registered at link time",
    describe: registered_descriptor,
};

#[test]
fn test_builtins_include_proxy() {
    let catalog = StaticTypeCatalog::builder().with_builtins().build();

    let proxy = catalog.describe(PROXY_TYPE).expect("proxy registered");
    assert!(proxy.is_factory());
    assert_eq!(proxy.parameters()[0].name, "from");
}

#[test]
fn test_registered_types_are_collected() {
    assert!(
        list_registered_types()
            .iter()
            .any(|(name, _)| *name == REGISTERED)
    );

    let standard = StaticTypeCatalog::standard();
    assert!(standard.contains(REGISTERED));
    assert!(standard.contains(PROXY_TYPE));

    let explicit_only = StaticTypeCatalog::builder().build();
    assert!(!explicit_only.contains(REGISTERED));
}

#[test]
fn test_later_registration_replaces_earlier() {
    let catalog = StaticTypeCatalog::builder()
        .register(TypeDescriptor::non_instantiable("combat::Arena"))
        .register(TypeDescriptor::constructible(
            "combat::Arena",
            vec![ParameterSpec::new("size")],
            |args| Ok(Value::Literal(args.literal(0)?.clone())),
        ))
        .build();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.describe("combat::Arena").unwrap().is_instantiable());
    assert_eq!(catalog.type_names(), vec!["combat::Arena"]);
}

#[test]
fn test_constant_table_builtins() {
    let constants = ConstantTable::with_builtins();

    assert_eq!(constants.lookup_constant("i64::MAX"), Some(json!(i64::MAX)));
    assert_eq!(constants.lookup_constant("u8::MAX"), Some(json!(255)));
    assert_eq!(constants.lookup_constant("i64::MAXIMUM"), None);
}

#[test]
fn test_constant_table_define() {
    let constants = ConstantTable::new().define("app::VERSION", "1.2.0");

    assert_eq!(constants.len(), 1);
    assert_eq!(constants.lookup_constant("app::VERSION"), Some(json!("1.2.0")));
}
