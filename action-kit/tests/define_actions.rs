//! Tests for building action definitions

use action_kit::prelude::*;
use serde_json::{json, Value};

fn state(value: Value) -> State {
    State::try_from(value).unwrap()
}

#[test]
fn test_set_name_example() {
    let set_name: ActionDefinition = build("SET_NAME", ReducerSpec::field("name"), None).unwrap();

    let action = set_name.create(Some(json!("Alice")));
    assert_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({ "type": "SET_NAME", "payload": "Alice" })
    );

    let next = set_name.reduce(&state(json!({ "name": "Bob", "age": 5 })), &action);
    assert_eq!(next.to_value(), json!({ "name": "Alice", "age": 5 }));
}

#[test]
fn test_omitted_payload_clears_field() {
    let set_name: ActionDefinition = build("SET_NAME", ReducerSpec::field("name"), None).unwrap();

    let action = set_name.create(None);
    assert_eq!(serde_json::to_value(&action).unwrap(), json!({ "type": "SET_NAME" }));

    let next = set_name.reduce(&state(json!({ "name": "Bob", "age": 5 })), &action);
    assert_eq!(next.get("name"), None);
    assert_eq!(next.to_value(), json!({ "age": 5 }));
}

#[test]
fn test_missing_arguments() {
    assert_eq!(
        build::<State>("", ReducerSpec::field("name"), None).unwrap_err(),
        BuildError::MissingType
    );
    assert_eq!(
        build::<State>("SET_NAME", ReducerSpec::field(""), None).unwrap_err(),
        BuildError::MissingReducer("SET_NAME".into())
    );
}

#[test]
fn test_custom_creator_type_is_not_checked() {
    let def = build(
        "DECLARED",
        ReducerSpec::update(|s: &State, _: &Action| s.clone()),
        Some(creator(|_| Action::new("ALIAS"))),
    )
    .unwrap();

    assert_eq!(def.action_type(), "DECLARED");
    assert_eq!(def.create(None).action_type(), "ALIAS");
}

#[test]
fn test_definitions_are_shared_between_clones() {
    let def: ActionDefinition = build("SET_X", ReducerSpec::field("x"), None).unwrap();
    let copy = def.clone();

    assert!(std::sync::Arc::ptr_eq(def.reducer(), copy.reducer()));
    assert_eq!(copy.create(Some(json!(1))), def.create(Some(json!(1))));
}
