//! Unit tests for CLI commands

use scopewire::Error;
use scopewire::commands;
use scopewire_infrastructure::config::AppConfig;
use std::path::PathBuf;
use tempfile::TempDir;

const BINDINGS: &str = r#"{
    "greeting": "hello",
    "alias": "@greeting",
    "max": "i64::MAX",
    "config": {"http": {"port": 8080}},
    "port": "scopewire::Proxy",
    "port.from": ["config", "http", "port"]
}"#;

fn write_bindings(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("bindings.json");
    std::fs::write(&path, BINDINGS).unwrap();
    path
}

#[test]
fn test_get() {
    let dir = TempDir::new().unwrap();
    let bindings = write_bindings(&dir);
    let config = AppConfig::default();

    assert_eq!(commands::get(&bindings, "alias", &config).unwrap(), "hello");
    assert_eq!(commands::get(&bindings, "port", &config).unwrap(), "8080");
    assert_eq!(
        commands::get(&bindings, "max", &config).unwrap(),
        i64::MAX.to_string()
    );
}

#[test]
fn test_tokenize() {
    let dir = TempDir::new().unwrap();
    let bindings = write_bindings(&dir);
    let config = AppConfig::default();

    assert_eq!(
        commands::tokenize(&bindings, "port", false, &config).unwrap(),
        r#"invoke(scopewire::Proxy(["config","http","port"]), "port")"#
    );
    let json = commands::tokenize(&bindings, "alias", true, &config).unwrap();
    assert!(json.contains("\"goto\""));
}

#[test]
fn test_compile_then_run() {
    let dir = TempDir::new().unwrap();
    let bindings = write_bindings(&dir);
    let config = AppConfig::default();

    let plan = commands::compile(&bindings, &config).unwrap();
    let plan_path = dir.path().join("bindings.plan.json");
    std::fs::write(&plan_path, plan).unwrap();

    assert_eq!(commands::run(&plan_path, "alias", &config).unwrap(), "hello");
    assert_eq!(commands::run(&plan_path, "port", &config).unwrap(), "8080");
    assert!(matches!(
        commands::run(&plan_path, "missing", &config),
        Err(Error::UndefinedIdentifier { .. })
    ));
}

#[test]
fn test_compile_honors_plan_config() {
    let dir = TempDir::new().unwrap();
    let bindings = write_bindings(&dir);
    let mut config = AppConfig::default();
    config.plan.pretty = false;
    config.plan.include_source = false;

    let plan = commands::compile(&bindings, &config).unwrap();
    assert!(!plan.contains('\n'));
    assert!(!plan.contains("\"source\""));
}

#[test]
fn test_missing_plan_file() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
        commands::run(&dir.path().join("absent.plan.json"), "alias", &AppConfig::default()),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_types_include_builtins() {
    assert!(commands::types().iter().any(|name| name == "scopewire::Proxy"));
}
