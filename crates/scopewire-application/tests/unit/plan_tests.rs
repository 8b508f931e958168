//! Unit tests for compiled plans

use crate::test_utils::mortal_combat::{
    ARENA, BATTLE, Battle, FIGHTER, FIGHTER_FACTORY, LIVE_FOREST, LiveForest, catalog,
    fighter_name, scope_builder,
};
use scopewire_application::plan::{PlanEntry, compile};
use scopewire_application::{CompiledPlan, ConstantTable, PlanSerializer, Registry, Scope};
use scopewire_domain::{Error, Token, Value};
use serde_json::json;
use std::sync::Arc;

fn registry() -> Registry {
    Registry::builder()
        .bind("battle", BATTLE)
        .bind("battle.fighter1.name", "Kung Lao")
        .bind("battle.fighter2", "@fighter")
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .bind(ARENA, LIVE_FOREST)
        .bind("max", "i64::MAX")
        .build()
}

fn compiled() -> CompiledPlan {
    compile(&registry(), &*catalog(), &ConstantTable::with_builtins()).unwrap()
}

#[test]
fn test_compile_skips_type_name_keys() {
    let plan = compiled();

    let identifiers: Vec<&str> = plan.identifiers().collect();
    assert_eq!(
        identifiers,
        vec!["battle", "battle.fighter1.name", "battle.fighter2", "fighter", "fighter.name", "max"]
    );
    assert_eq!(plan.entry("battle").unwrap().source.as_deref(), Some(BATTLE));
    assert_eq!(
        plan.token("max"),
        Some(&Token::Constant {
            name: "i64::MAX".to_string(),
            value: json!(i64::MAX),
        })
    );
}

#[test]
fn test_compile_rejects_native_closures() {
    let scope = scope_builder()
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .bind_fn("clock", |_, _| Ok(Value::from(0_i64)))
        .build();

    match scope.compile() {
        Err(Error::FactoryBinding { identifier }) => assert_eq!(identifier, "clock"),
        other => panic!("Expected FactoryBinding error, got {other:?}"),
    }
}

#[test]
fn test_plan_document_shape() {
    let rendered = PlanSerializer::new()
        .with_pretty(false)
        .render_plan(&compiled())
        .unwrap();
    let document: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(document["version"], json!(1));
    assert_eq!(document["entries"][3]["id"], json!("fighter"));
    assert_eq!(document["entries"][3]["token"]["kind"], json!("type"));
    assert_eq!(document["entries"][3]["source"], json!(FIGHTER));
    assert!(!rendered.contains('\n'));

    let without_source = PlanSerializer::new().with_source(false).render_plan(&compiled()).unwrap();
    assert!(!without_source.contains("\"source\""));
}

#[test]
fn test_plan_backed_scope_matches_registry_scope() {
    let serializer = PlanSerializer::new();
    let rendered = serializer.render_plan(&compiled()).unwrap();
    let plan = serializer.load_plan(&rendered).unwrap();
    assert_eq!(plan, compiled());

    let scope = Scope::from_plan(plan, catalog(), Arc::new(ConstantTable::new()));
    let battle = scope.get("battle").unwrap().downcast::<Battle>().unwrap();

    assert_eq!(fighter_name(&battle.fighter1), Some("Kung Lao"));
    assert!(battle.fighter2.ptr_eq(scope.get("fighter").unwrap().as_instance().unwrap()));
    assert_eq!(battle.arena.downcast::<LiveForest>().unwrap().season, "summer");
    assert_eq!(scope.get("max").unwrap().as_i64(), Some(i64::MAX));
    assert!(scope.registry().is_none());
    assert!(scope.get(ARENA).unwrap_err().is_undefined());
}

#[test]
fn test_render_single_token() {
    let serializer = PlanSerializer::new().with_pretty(false);
    let token = Token::goto("fighter");

    let rendered = serializer.render(&token).unwrap();
    assert_eq!(rendered, r#"{"kind":"goto","target":"fighter"}"#);
    assert_eq!(serializer.load(&rendered).unwrap(), token);
}

#[test]
fn test_render_rejects_native_tokens() {
    let scope = scope_builder()
        .bind("battle", BATTLE)
        .bind_fn("battle.fighter1", |_, _| Ok(Value::null()))
        .bind("battle.fighter2", "@battle.fighter1")
        .bind(ARENA, LIVE_FOREST)
        .build();
    let token = scope.tokenize("battle").unwrap();

    match PlanSerializer::new().render(&token) {
        Err(Error::NotSerializable { identifier }) => assert_eq!(identifier, "battle.fighter1"),
        other => panic!("Expected NotSerializable error, got {other:?}"),
    }

    let mut plan = CompiledPlan::new();
    plan.insert(PlanEntry::new("battle", token));
    assert!(matches!(
        PlanSerializer::new().render_plan(&plan),
        Err(Error::NotSerializable { .. })
    ));
}

#[test]
fn test_load_plan_rejects_bad_documents() {
    let serializer = PlanSerializer::new();

    for text in [
        "not json",
        r#"{"version": 2, "entries": []}"#,
        r#"{"version": 1, "entries": [
            {"id": "a", "token": {"kind": "scalar", "value": 1}},
            {"id": "a", "token": {"kind": "scalar", "value": 2}}
        ]}"#,
        r#"{"version": 1, "entries": [{"id": "a", "token": {"kind": "invoke"}}]}"#,
    ] {
        assert!(
            matches!(serializer.load_plan(text), Err(Error::Plan { .. })),
            "{text}"
        );
    }
}

#[test]
fn test_plan_scope_reports_unknown_types() {
    let mut plan = CompiledPlan::new();
    plan.insert(PlanEntry::new(
        "ghost",
        Token::Type {
            identifier: "ghost".to_string(),
            type_name: "combat::Ghost".to_string(),
            arguments: Vec::new(),
            factory: false,
        },
    ));
    let scope = Scope::from_plan(plan, catalog(), Arc::new(ConstantTable::new()));

    assert!(matches!(scope.get("ghost"), Err(Error::Plan { .. })));
}

#[test]
fn test_plan_scope_rejects_factory_flag_mismatch() {
    let mut plan = CompiledPlan::new();
    plan.insert(PlanEntry::new(
        "maker",
        Token::Type {
            identifier: "maker".to_string(),
            type_name: FIGHTER_FACTORY.to_string(),
            arguments: vec![Token::scalar(false), Token::scalar("Scorpion")],
            factory: false,
        },
    ));
    plan.insert(PlanEntry::new(
        "fighter",
        Token::Type {
            identifier: "fighter".to_string(),
            type_name: FIGHTER.to_string(),
            arguments: vec![Token::scalar("Scorpion")],
            factory: true,
        },
    ));
    let scope = Scope::from_plan(plan, catalog(), Arc::new(ConstantTable::new()));

    for identifier in ["maker", "fighter"] {
        assert!(
            matches!(scope.get(identifier), Err(Error::Plan { .. })),
            "{identifier}"
        );
    }
}

#[test]
fn test_plan_scope_has_no_substitute_entries() {
    let mut plan = compiled();
    plan.insert(PlanEntry::new("arena", Token::goto(ARENA)));
    let scope = Scope::from_plan(plan, catalog(), Arc::new(ConstantTable::with_builtins()));

    assert!(!scope.contains(ARENA));
    assert!(scope.get("arena").unwrap_err().is_undefined());
}
