#![allow(non_snake_case)]

use super::*;

#[test]
fn CoreError___not_a_namespace___names_the_attribute() {
    let err = CoreError::NotANamespace("osgi".into());

    assert_eq!(err.to_string(), "attribute 'osgi' exists but is not a namespace");
}

#[test]
fn CoreError___field_type___displays_all_parts() {
    let err = CoreError::FieldType {
        field: "sha256".into(),
        expected: "string",
        actual: "number",
    };

    let msg = err.to_string();

    assert!(msg.contains("sha256"));
    assert!(msg.contains("expected string"));
    assert!(msg.contains("number"));
}

#[test]
fn CoreError___from_json_error___converts_to_config() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let err: CoreError = json_err.into();

    assert!(matches!(err, CoreError::Config(_)));
    assert!(err.to_string().starts_with("configuration error:"));
}
