//! Unit tests for bindings files

use scopewire_domain::{Binding, Error};
use scopewire_infrastructure::bindings::{BindingsFormat, load_bindings, parse_bindings};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_json_bindings_keep_document_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bindings.json");
    std::fs::write(
        &path,
        r#"{"fighter.name": "Baraka", "fighter": "combat::Fighter", "port": 8080}"#,
    )
    .unwrap();

    let registry = load_bindings(&path).unwrap();
    let identifiers: Vec<&str> = registry.identifiers().collect();
    assert_eq!(identifiers, vec!["fighter.name", "fighter", "port"]);
    assert_eq!(registry.get("port"), Some(&Binding::from(8080_i64)));
}

#[test]
fn test_toml_bindings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bindings.toml");
    std::fs::write(
        &path,
        "fighter = \"combat::Fighter\"\n\"fighter.name\" = \"Baraka\"\ndebug = true\n",
    )
    .unwrap();

    let registry = load_bindings(&path).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.get("fighter.name").and_then(Binding::as_str),
        Some("Baraka")
    );
    assert_eq!(registry.get("debug"), Some(&Binding::from(true)));
}

#[test]
fn test_toml_unquoted_dotted_key_conflicts() {
    let result = parse_bindings(
        "fighter = \"combat::Fighter\"\nfighter.name = \"Baraka\"\n",
        BindingsFormat::Toml,
    );

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        BindingsFormat::from_path(Path::new("a/bindings.JSON")).unwrap(),
        BindingsFormat::Json
    );
    assert_eq!(
        BindingsFormat::from_path(Path::new("bindings.toml")).unwrap(),
        BindingsFormat::Toml
    );
    assert!(matches!(
        BindingsFormat::from_path(Path::new("bindings.yaml")),
        Err(Error::Config { .. })
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();

    match load_bindings(dir.path().join("absent.json")) {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("absent.json"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_non_object_json() {
    assert!(matches!(
        parse_bindings("[1, 2, 3]", BindingsFormat::Json),
        Err(Error::Json { .. })
    ));
}
