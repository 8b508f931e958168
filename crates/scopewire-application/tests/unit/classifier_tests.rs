//! Unit tests for binding classification

use crate::test_utils::mortal_combat::{FIGHTER, catalog};
use scopewire_application::domain_services::{
    BuildMode, Classification, Classifier, looks_like_type_path,
};
use scopewire_application::{ConstantTable, Registry};
use scopewire_domain::{Binding, Error, Value};
use serde_json::json;

fn registry() -> Registry {
    Registry::builder()
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .bind("@champion", "fighter")
        .bind("@dangling", "nobody")
        .bind("max", "i64::MAX")
        .bind("port", 8080_i64)
        .bind("empty", "")
        .bind_fn("clock", |_, _| Ok(Value::from(0_i64)))
        .build()
}

fn classify(mode: BuildMode, identifier: &str) -> Result<String, Error> {
    let registry = registry();
    let catalog = catalog();
    let constants = ConstantTable::with_builtins();
    let classifier = Classifier::new(&registry, &*catalog, &constants, mode);
    let binding = registry.get(identifier).expect("bound");

    Ok(match classifier.classify(binding, identifier)? {
        Classification::Scalar(value) => format!("scalar {value}"),
        Classification::Constant { name, value } => format!("constant {name}={value}"),
        Classification::TypeReference(descriptor) => format!("type {}", descriptor.name()),
        Classification::Symlink { symlink, target } => format!("symlink {symlink}->{target}"),
        Classification::Variable { target } => format!("variable {target}"),
        Classification::Invokable(_) => "invokable".to_string(),
    })
}

fn classify_literal(value: &str) -> Result<String, Error> {
    let registry = registry().to_builder().bind("probe", value).build();
    let catalog = catalog();
    let constants = ConstantTable::with_builtins();
    let classifier = Classifier::new(&registry, &*catalog, &constants, BuildMode::Execute);
    let binding = registry.get("probe").expect("bound");

    Ok(match classifier.classify(binding, "probe")? {
        Classification::Scalar(value) => format!("scalar {value}"),
        Classification::Symlink { target, .. } => format!("symlink {target}"),
        Classification::Variable { target } => format!("variable {target}"),
        Classification::TypeReference(descriptor) => format!("type {}", descriptor.name()),
        Classification::Constant { name, .. } => format!("constant {name}"),
        Classification::Invokable(_) => "invokable".to_string(),
    })
}

#[test]
fn test_type_constant_and_scalar() {
    assert_eq!(classify(BuildMode::Execute, "fighter").unwrap(), format!("type {FIGHTER}"));
    assert_eq!(
        classify(BuildMode::Execute, "max").unwrap(),
        format!("constant i64::MAX={}", i64::MAX)
    );
    assert_eq!(classify(BuildMode::Execute, "port").unwrap(), "scalar 8080");
    assert_eq!(classify(BuildMode::Execute, "fighter.name").unwrap(), "scalar \"Baraka\"");
}

#[test]
fn test_symlink_through_indirection_entry() {
    assert_eq!(classify_literal("@champion").unwrap(), "symlink fighter");
}

#[test]
fn test_symlink_to_identifier() {
    assert_eq!(classify_literal("@fighter").unwrap(), "symlink fighter");
}

#[test]
fn test_unknown_symlink() {
    match classify_literal("@nobody") {
        Err(Error::UnknownSymlink { symlink }) => assert_eq!(symlink, "@nobody"),
        other => panic!("Expected UnknownSymlink error, got {other:?}"),
    }
    match classify_literal("@dangling") {
        Err(Error::UnknownSymlink { symlink }) => assert_eq!(symlink, "@dangling"),
        other => panic!("Expected UnknownSymlink error, got {other:?}"),
    }
}

#[test]
fn test_variable() {
    assert_eq!(classify_literal("$fighter.name").unwrap(), "variable fighter.name");
    match classify_literal("$missing") {
        Err(Error::UnknownVariable { variable }) => assert_eq!(variable, "$missing"),
        other => panic!("Expected UnknownVariable error, got {other:?}"),
    }
}

#[test]
fn test_empty_binding() {
    match classify(BuildMode::Execute, "empty") {
        Err(Error::EmptyBindingValue { identifier }) => assert_eq!(identifier, "empty"),
        other => panic!("Expected EmptyBindingValue error, got {other:?}"),
    }
}

#[test]
fn test_invokable_depends_on_mode() {
    assert_eq!(classify(BuildMode::Execute, "clock").unwrap(), "invokable");
    match classify(BuildMode::Compile, "clock") {
        Err(Error::FactoryBinding { identifier }) => assert_eq!(identifier, "clock"),
        other => panic!("Expected FactoryBinding error, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_path_is_scalar() {
    assert_eq!(
        classify_literal("combat::Unknown").unwrap(),
        "scalar \"combat::Unknown\""
    );
    assert!(looks_like_type_path("combat::Unknown"));
    assert!(!looks_like_type_path("http://example.com"));
    assert!(!looks_like_type_path("plain"));
}

#[test]
fn test_non_string_literals_are_scalars() {
    let registry = Registry::from_literals([("list", json!(["a", "b"])), ("flag", json!(true))]);
    let catalog = catalog();
    let constants = ConstantTable::new();
    let classifier = Classifier::new(&registry, &*catalog, &constants, BuildMode::Compile);

    for identifier in ["list", "flag"] {
        let binding: &Binding = registry.get(identifier).unwrap();
        assert!(matches!(
            classifier.classify(binding, identifier),
            Ok(Classification::Scalar(_))
        ));
    }
}
