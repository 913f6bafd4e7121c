//! Tests for the dictionary transformer
//!
//! Copyright (c) 2025 Transkit Team
//! Licensed under the Apache-2.0 license

use super::{built_in, transform_dict, transform_value, DictTransformer, Mapping};
use crate::case::camel_to_snake;
use crate::{Error, Result};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::borrow::Cow;

fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("test fixture is not a mapping: {}", other),
    }
}

fn snake_key(key: &str) -> Result<String> {
    Ok(camel_to_snake(key, "_"))
}

fn passthrough_key(key: &str) -> Result<String> {
    Ok(key.to_string())
}

fn snake_value(value: &Value) -> Result<Value> {
    Ok(Value::String(crate::case::camel_to_snake_value(value, "_")))
}

#[test]
fn test_identity_short_circuit_returns_same_reference() {
    let input = mapping(json!({"CamelCase": "gnaaa", "foo_oool": 42}));

    let output = transform_dict(&input, None, None, false).unwrap();
    match output {
        Cow::Borrowed(map) => assert!(std::ptr::eq(map, &input)),
        Cow::Owned(_) => panic!("identity transform should not copy"),
    }

    let output = transform_dict(&input, None, None, true).unwrap();
    assert!(matches!(output, Cow::Borrowed(_)));
}

#[test]
fn test_key_transformation() {
    let input = mapping(json!({"CamelCase": "gnaaa", "foo_oool": 42}));

    let output = transform_dict(&input, Some(&snake_key), None, false).unwrap();
    assert_eq!(
        Value::Object(output.into_owned()),
        json!({"camel_case": "gnaaa", "foo_oool": 42})
    );
}

#[test]
fn test_value_transformation() {
    let input = mapping(json!({"CamelCase": "gnaaa", "foo_oool": 42}));

    let output = transform_dict(&input, None, Some(&built_in::stringify_value), false).unwrap();
    assert!(matches!(output, Cow::Owned(_)));
    assert_eq!(
        Value::Object(output.into_owned()),
        json!({"CamelCase": "gnaaa", "foo_oool": "42"})
    );
}

#[test]
fn test_key_and_value_transformation() {
    let input = mapping(json!({"CamelCase": "gnaaa", "foo_oool": 42}));

    let output = transform_dict(
        &input,
        Some(&snake_key),
        Some(&built_in::stringify_value),
        false,
    )
    .unwrap();
    assert_eq!(
        Value::Object(output.into_owned()),
        json!({"camel_case": "gnaaa", "foo_oool": "42"})
    );
}

#[test]
fn test_recursive_transformation() {
    let input = mapping(json!({"1": {"11": "snakeCase", "12": "snake_case"}, "2": 22}));

    let output = transform_dict(&input, Some(&passthrough_key), Some(&snake_value), true).unwrap();
    assert_eq!(
        Value::Object(output.into_owned()),
        json!({"1": {"11": "snake_case", "12": "snake_case"}, "2": "22"})
    );
}

#[test]
fn test_non_recursive_passes_nested_mapping_to_value_fn() {
    let input = mapping(json!({"outer": {"innerKey": 1}}));

    let output = transform_dict(&input, Some(&snake_key), None, false).unwrap();
    // Nested keys are untouched without recursion
    assert_eq!(Value::Object(output.into_owned()), json!({"outer": {"innerKey": 1}}));

    let output = transform_dict(&input, None, Some(&built_in::stringify_value), false).unwrap();
    assert_eq!(output["outer"], json!("{\"innerKey\":1}"));
}

#[test]
fn test_recursive_keys_at_every_depth() {
    let input = mapping(json!({
        "topLevel": {
            "midLevel": {
                "deepKey": "deepValue"
            }
        }
    }));

    let output = transform_dict(&input, Some(&snake_key), None, true).unwrap();
    assert_eq!(
        Value::Object(output.into_owned()),
        json!({"top_level": {"mid_level": {"deep_key": "deepValue"}}})
    );
}

#[test]
fn test_arrays_are_not_mappings() {
    let input = mapping(json!({"items": [{"innerKey": 1}]}));

    let output = transform_dict(&input, Some(&snake_key), None, true).unwrap();
    assert_eq!(output["items"], json!([{"innerKey": 1}]));

    let output = transform_dict(&input, None, Some(&built_in::stringify_value), true).unwrap();
    assert_eq!(output["items"], json!("[{\"innerKey\":1}]"));
}

#[test]
fn test_key_collision_last_write_wins() {
    let input = mapping(json!({"fooBar": 1, "other": 2, "foo_bar": 3}));

    let output = transform_dict(&input, Some(&snake_key), None, false).unwrap();
    assert_eq!(output.len(), 2);
    assert_eq!(output["foo_bar"], json!(3));

    let keys: Vec<&String> = output.keys().collect();
    assert_eq!(keys, vec!["foo_bar", "other"]);
}

#[test]
fn test_iteration_order_preserved() {
    let input = mapping(json!({"zetaKey": 1, "alphaKey": 2, "midKey": 3}));

    let output = transform_dict(&input, Some(&snake_key), None, false).unwrap();
    let keys: Vec<&String> = output.keys().collect();
    assert_eq!(keys, vec!["zeta_key", "alpha_key", "mid_key"]);
}

#[test]
fn test_input_is_not_mutated() {
    let input = mapping(json!({"outerKey": {"innerKey": "someValue"}, "plain": 1}));
    let before = input.clone();

    let output = transform_dict(&input, Some(&snake_key), Some(&snake_value), true).unwrap();

    assert_eq!(input, before);
    assert_ne!(Value::Object(output.into_owned()), Value::Object(before));
}

#[test]
fn test_function_errors_propagate_unmodified() {
    let input = mapping(json!({"ok": 1, "bad": 2}));
    let reject_bad = |key: &str| -> Result<String> {
        if key == "bad" {
            Err(Error::custom(anyhow::anyhow!("rejected key {}", key)))
        } else {
            Ok(key.to_string())
        }
    };

    let err = transform_dict(&input, Some(&reject_bad), None, false).unwrap_err();
    match err {
        Error::Custom { message, .. } => assert_eq!(message, "rejected key bad"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_value_function_errors_propagate() {
    let input = mapping(json!({"speed": "fast"}));

    let err = transform_dict(&input, None, Some(&built_in::bps_to_mbps_values), false).unwrap_err();
    assert!(matches!(err, Error::Conversion { .. }));
}

#[test]
fn test_transform_value_requires_mapping() {
    let input = json!([1, 2, 3]);

    let err = transform_value(&input, Some(&snake_key), None, false).unwrap_err();
    assert!(matches!(err, Error::NotAMapping { found: "array" }));

    let err = transform_value(&json!("text"), None, None, false).unwrap_err();
    assert!(matches!(err, Error::NotAMapping { found: "string" }));
}

#[test]
fn test_transform_value_identity_borrows_input() {
    let input = json!({"a": 1});

    match transform_value(&input, None, None, false).unwrap() {
        Cow::Borrowed(value) => assert!(std::ptr::eq(value, &input)),
        Cow::Owned(_) => panic!("identity transform should not copy"),
    }
}

#[test]
fn test_builder_identity() {
    let transformer = DictTransformer::new();
    assert!(transformer.is_identity());

    let input = mapping(json!({"a": 1}));
    assert!(matches!(transformer.apply(&input).unwrap(), Cow::Borrowed(_)));
}

#[test]
fn test_builder_with_built_ins() {
    let transformer = DictTransformer::new()
        .keys(built_in::camel_case_keys("_"))
        .values(built_in::bps_to_mbps_values)
        .recursive(true);
    assert!(!transformer.is_identity());

    let input = json!({
        "link_speed": 1129000,
        "uplink": {"peak_rate": "1000000"}
    });

    let output = transformer.apply_value(&input).unwrap();
    assert_eq!(*output, json!({"linkSpeed": 1.13, "uplink": {"peakRate": 1.0}}));
}

#[test]
fn test_builder_borrows_captured_state() {
    let prefix = String::from("x_");
    let transformer = DictTransformer::new().keys(|key: &str| Ok(format!("{}{}", prefix, key)));

    let input = mapping(json!({"a": 1}));
    let output = transformer.apply(&input).unwrap();
    assert_eq!(output["x_a"], json!(1));
}

#[test]
fn test_builder_debug() {
    let transformer = DictTransformer::new().keys(built_in::snake_case_keys(".")).recursive(true);
    let debug = format!("{:?}", transformer);
    assert!(debug.contains("key_fn: true"));
    assert!(debug.contains("value_fn: false"));
    assert!(debug.contains("recursive: true"));
}

#[test]
fn test_built_in_case_functions() {
    let snake = built_in::snake_case_keys(".");
    assert_eq!(snake("CamelCase").unwrap(), "camel.case");

    let camel = built_in::camel_case_values(".");
    assert_eq!(camel(&json!("snake.CasE")).unwrap(), json!("snakeCase"));
    assert_eq!(camel(&json!(null)).unwrap(), json!("None"));
}

/// Strategy for generating nested mappings with controlled depth
fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z_]{0,20}".prop_map(Value::String),
    ];

    let value = leaf.prop_recursive(3, 24, 4, |inner| {
        proptest::collection::vec(("[a-zA-Z][a-zA-Z0-9]{0,12}", inner), 0..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect()))
    });

    proptest::collection::vec(("[a-zA-Z][a-zA-Z0-9]{0,12}", value), 0..6)
        .prop_map(|entries| entries.into_iter().collect::<Mapping>())
}

proptest! {
    /// Property: without functions the input comes back by reference
    #[test]
    fn prop_identity_short_circuit(input in mapping_strategy(), recursive in any::<bool>()) {
        let output = transform_dict(&input, None, None, recursive).unwrap();
        match output {
            Cow::Borrowed(map) => prop_assert!(std::ptr::eq(map, &input)),
            Cow::Owned(_) => prop_assert!(false, "identity transform copied its input"),
        }
    }

    /// Property: the input mapping is unchanged after any transformation
    #[test]
    fn prop_input_not_mutated(input in mapping_strategy(), recursive in any::<bool>()) {
        let before = input.clone();
        let _ = transform_dict(&input, Some(&snake_key), Some(&snake_value), recursive).unwrap();
        prop_assert_eq!(input, before);
    }

    /// Property: a passthrough key function with no value function reproduces the input
    #[test]
    fn prop_passthrough_reproduces_input(input in mapping_strategy(), recursive in any::<bool>()) {
        let output = transform_dict(&input, Some(&passthrough_key), None, recursive).unwrap();
        prop_assert_eq!(output.into_owned(), input);
    }
}
