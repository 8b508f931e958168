//! Unit tests for plan tokens

use scopewire_domain::{Invokable, Token, Value};
use serde_json::json;

fn fighter_token() -> Token {
    Token::Type {
        identifier: "fighter".to_string(),
        type_name: "combat::Fighter".to_string(),
        arguments: vec![Token::scalar("Baraka")],
        factory: false,
    }
}

#[test]
fn test_display_script_form() {
    assert_eq!(fighter_token().to_string(), "combat::Fighter(\"Baraka\")");
    assert_eq!(Token::goto("something").to_string(), "goto(something)");

    let factory = Token::Type {
        identifier: "fighter".to_string(),
        type_name: "combat::FighterFactory".to_string(),
        arguments: vec![Token::scalar(true), Token::scalar("Scorpion")],
        factory: true,
    };
    assert_eq!(
        factory.to_string(),
        "invoke(combat::FighterFactory(true, \"Scorpion\"), \"fighter\")"
    );

    let portal = Token::Type {
        identifier: "arena".to_string(),
        type_name: "arena::Portal".to_string(),
        arguments: vec![],
        factory: false,
    };
    assert_eq!(portal.to_string(), "arena::Portal");
}

#[test]
fn test_tagged_json_shape() {
    let json = serde_json::to_value(fighter_token()).unwrap();
    assert_eq!(json["kind"], "type");
    assert_eq!(json["type_name"], "combat::Fighter");
    assert_eq!(json["arguments"][0], json!({ "kind": "scalar", "value": "Baraka" }));

    let back: Token = serde_json::from_value(json).unwrap();
    assert_eq!(back, fighter_token());
}

#[test]
fn test_native_token_is_not_serializable() {
    let native = Token::Invoke {
        identifier: "fighter.name".to_string(),
        callable: Invokable::new(|_, _| Ok(Value::from("Baraka"))),
    };
    let tree = Token::Type {
        identifier: "fighter".to_string(),
        type_name: "combat::Fighter".to_string(),
        arguments: vec![native],
        factory: false,
    };

    assert_eq!(tree.find_native(), Some("fighter.name"));
    assert!(!tree.is_serializable());
    assert!(serde_json::to_string(&tree).is_err());
    assert!(fighter_token().is_serializable());
    assert_eq!(tree.node_count(), 2);
}
