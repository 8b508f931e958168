//! Unit tests for token building

use crate::test_utils::mortal_combat::{
    ARENA, BATTLE, FIGHTER, FIGHTER_FACTORY, LIVE_FOREST, PORTAL, TOURNAMENT, catalog,
    catalog_builder,
};
use scopewire_application::domain_services::{BuildMode, TokenBuilder};
use scopewire_application::{ConstantTable, Registry};
use scopewire_domain::{Error, Token, TypeDescriptor, Value};

fn build(registry: &Registry, identifier: &str) -> Result<Token, Error> {
    let catalog = catalog();
    let constants = ConstantTable::with_builtins();
    let mut builder = TokenBuilder::new(registry, &*catalog, &constants, BuildMode::Execute);
    builder.build(identifier)
}

#[test]
fn test_simple_type() {
    let registry = Registry::builder()
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .build();

    let token = build(&registry, "fighter").unwrap();
    assert_eq!(token.to_string(), r#"combat::Fighter("Baraka")"#);
}

#[test]
fn test_nested_parameters_and_symlink() {
    let registry = Registry::builder()
        .bind("battle", BATTLE)
        .bind("battle.fighter1.name", "Kung Lao")
        .bind("battle.fighter2", "@fighter")
        .bind("battle.arena", PORTAL)
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .build();

    let token = build(&registry, "battle").unwrap();
    assert_eq!(
        token.to_string(),
        r#"combat::Battle(combat::Fighter("Kung Lao"), goto(fighter), combat::arena::Portal)"#
    );
    assert_eq!(token.node_count(), 5);
}

#[test]
fn test_abstract_type_substitution() {
    let registry = Registry::builder()
        .bind("battle", BATTLE)
        .bind("battle.fighter1", "@fighter")
        .bind("battle.fighter2", "@fighter")
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .bind(ARENA, LIVE_FOREST)
        .build();

    let token = build(&registry, "battle").unwrap();
    assert_eq!(
        token.to_string(),
        r#"combat::Battle(goto(fighter), goto(fighter), combat::arena::LiveForest("summer"))"#
    );
}

#[test]
fn test_transitive_substitution() {
    const REALM: &str = "combat::Realm";
    let registry = Registry::builder()
        .bind("arena", ARENA)
        .bind(ARENA, REALM)
        .bind(REALM, PORTAL)
        .build();
    let catalog = catalog_builder()
        .register(TypeDescriptor::non_instantiable(REALM))
        .build();
    let constants = ConstantTable::new();

    let token = TokenBuilder::new(&registry, &catalog, &constants, BuildMode::Execute)
        .build("arena")
        .unwrap();
    match token {
        Token::Type {
            identifier,
            type_name,
            ..
        } => {
            assert_eq!(identifier, "arena");
            assert_eq!(type_name, PORTAL);
        }
        other => panic!("Expected Type token, got {other:?}"),
    }
}

#[test]
fn test_missing_substitute() {
    let registry = Registry::builder()
        .bind("battle", BATTLE)
        .bind("battle.fighter1", "@fighter")
        .bind("battle.fighter2", "@fighter")
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .build();

    match build(&registry, "battle") {
        Err(Error::NoImplementationFound { type_name, path }) => {
            assert_eq!(type_name, ARENA);
            assert_eq!(path, "battle.arena");
        }
        other => panic!("Expected NoImplementationFound error, got {other:?}"),
    }
}

#[test]
fn test_factory_flag() {
    let registry = Registry::builder()
        .bind("fighter", FIGHTER_FACTORY)
        .bind("fighter.is_debug", true)
        .bind("fighter.name", "Sub-Zero")
        .build();

    let token = build(&registry, "fighter").unwrap();
    assert_eq!(
        token.to_string(),
        r#"invoke(combat::FighterFactory(true, "Sub-Zero"), "fighter")"#
    );
}

#[test]
fn test_typed_parameter_builds_nested_graph() {
    let registry = Registry::builder()
        .bind("tournament", TOURNAMENT)
        .bind("tournament.main.fighter1.name", "Kung Lao")
        .bind("tournament.main.fighter2.name", "Raiden")
        .bind("tournament.main.arena", PORTAL)
        .build();

    let token = build(&registry, "tournament").unwrap();
    assert_eq!(
        token.to_string(),
        concat!(
            r#"combat::Tournament(combat::Battle(combat::Fighter("Kung Lao"), "#,
            r#"combat::Fighter("Raiden"), combat::arena::Portal))"#
        )
    );
}

#[test]
fn test_self_substitution_is_cyclic() {
    let registry = Registry::builder().bind("arena", ARENA).bind(ARENA, ARENA).build();

    match build(&registry, "arena") {
        Err(Error::CyclicBinding { chain }) => {
            assert_eq!(chain, "arena: combat::Arena -> arena: combat::Arena");
        }
        other => panic!("Expected CyclicBinding error, got {other:?}"),
    }
}

#[test]
fn test_depth_limit() {
    let registry = Registry::builder()
        .bind("fighter", FIGHTER)
        .bind("fighter.name", "Baraka")
        .bind("battle", BATTLE)
        .build();
    let catalog = catalog();
    let constants = ConstantTable::new();

    let result = TokenBuilder::new(&registry, &*catalog, &constants, BuildMode::Execute)
        .with_max_depth(1)
        .build("battle");
    assert!(matches!(result, Err(Error::CyclicBinding { .. })));
}

#[test]
fn test_native_closure_becomes_invoke_token() {
    let registry = Registry::builder()
        .bind("battle", BATTLE)
        .bind_fn("battle.fighter1", |_, _| Ok(Value::from("stub")))
        .bind("battle.fighter2.name", "Raiden")
        .bind("battle.arena", PORTAL)
        .build();

    let token = build(&registry, "battle").unwrap();
    assert_eq!(token.find_native(), Some("battle.fighter1"));

    let catalog = catalog();
    let constants = ConstantTable::new();
    let compiled = TokenBuilder::new(&registry, &*catalog, &constants, BuildMode::Compile)
        .build("battle");
    match compiled {
        Err(Error::FactoryBinding { identifier }) => assert_eq!(identifier, "battle.fighter1"),
        other => panic!("Expected FactoryBinding error, got {other:?}"),
    }
}
