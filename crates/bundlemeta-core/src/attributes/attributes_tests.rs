#![allow(non_snake_case)]

use super::*;
use serde_json::json;

#[test]
fn AttributeMap___child_mut___creates_missing_namespace() {
    let mut attributes = AttributeMap::new();

    attributes.child_mut("osgi").unwrap().set("bsn", "com.example");

    assert_eq!(attributes.child("osgi").unwrap().get_str("bsn"), Some("com.example"));
}

#[test]
fn AttributeMap___child_mut___reuses_existing_namespace() {
    let mut attributes = AttributeMap::from_map(
        json!({"osgi": {"bv": "1.0.0"}}).as_object().unwrap().clone(),
    );

    attributes.child_mut("osgi").unwrap().set("bsn", "com.example");

    let osgi = attributes.child("osgi").unwrap();
    assert_eq!(osgi.get_str("bv"), Some("1.0.0"));
    assert_eq!(osgi.get_str("bsn"), Some("com.example"));
    assert_eq!(osgi.len(), 2);
}

#[test]
fn AttributeMap___child_mut_on_scalar___fails_and_leaves_value() {
    let mut attributes = AttributeMap::new();
    attributes.set("osgi", "not a namespace");

    let result = attributes.child_mut("osgi");

    assert!(matches!(result, Err(CoreError::NotANamespace(ref name)) if name == "osgi"));
    assert_eq!(attributes.get("osgi"), Some(&json!("not a namespace")));
}

#[test]
fn AttributeMap___child_mut___leaves_other_namespaces_alone() {
    let mut attributes = AttributeMap::new();
    attributes.set("maven2", json!({"groupId": "org.example"}));

    attributes.child_mut("osgi").unwrap().set("bsn", "x");

    assert_eq!(attributes.get("maven2"), Some(&json!({"groupId": "org.example"})));
    assert_eq!(attributes.len(), 2);
}

#[test]
fn AttributeMap___child_of_missing_or_scalar___returns_none() {
    let mut attributes = AttributeMap::new();
    attributes.set("scalar", 5);

    assert!(attributes.child("missing").is_none());
    assert!(attributes.child("scalar").is_none());
}

#[test]
fn AttributeMap___serialize___is_transparent_json_object() {
    let mut attributes = AttributeMap::new();
    attributes.child_mut("osgi").unwrap().set("bsn", "com.example");

    let value = serde_json::to_value(&attributes).unwrap();

    assert_eq!(value, json!({"osgi": {"bsn": "com.example"}}));
    let parsed: AttributeMap = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, attributes);
}

#[test]
fn NamespaceMut___set___returns_previous_value() {
    let mut attributes = AttributeMap::new();
    let mut osgi = attributes.child_mut("osgi").unwrap();
    osgi.set("bv", "1.0.0");

    let previous = osgi.set("bv", "2.0.0");

    assert_eq!(previous, Some(json!("1.0.0")));
    assert_eq!(osgi.get_str("bv"), Some("2.0.0"));
}

#[test]
fn NamespaceMut___remove___drops_key() {
    let mut attributes = AttributeMap::new();
    let mut osgi = attributes.child_mut("osgi").unwrap();
    osgi.set("bv", "1.0.0");

    osgi.remove("bv");

    assert!(!osgi.contains("bv"));
    assert!(osgi.is_empty());
}

#[test]
fn Namespace___iter___yields_all_entries() {
    let attributes = AttributeMap::from(
        json!({"osgi": {"bsn": "a", "bv": "1"}}).as_object().unwrap().clone(),
    );

    let mut keys: Vec<&str> = attributes.child("osgi").unwrap().iter().map(|(k, _)| k).collect();
    keys.sort_unstable();

    assert_eq!(keys, vec!["bsn", "bv"]);
}
