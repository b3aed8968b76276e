#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const STANDARD_ATTRS: [&str; 13] = [
    "bsn",
    "bv",
    "exports",
    "exportService",
    "description",
    "name",
    "license",
    "docUrl",
    "reqBundle",
    "provides",
    "requires",
    "fragHost",
    "bree",
];

#[test]
fn HeaderFieldRegistry___standard___registers_headers_in_order() {
    let registry = HeaderFieldRegistry::standard();

    let attrs: Vec<&str> = registry.attr_names().collect();

    assert_eq!(attrs, STANDARD_ATTRS);
    assert_eq!(registry.mappings()[0].header(), "Bundle-SymbolicName");
    assert_eq!(
        registry.mappings()[12].header(),
        "Bundle-RequiredExecutionEnvironment"
    );
}

#[test_case("Bundle-SymbolicName", "bsn")]
#[test_case("Bundle-Version", "bv")]
#[test_case("Export-Package", "exports")]
#[test_case("Export-Service", "exportService")]
#[test_case("Bundle-Description", "description")]
#[test_case("Bundle-Name", "name")]
#[test_case("Bundle-License", "license")]
#[test_case("Bundle-DocURL", "docUrl")]
#[test_case("Require-Bundle", "reqBundle")]
#[test_case("Provide-Capability", "provides")]
#[test_case("Require-Capability", "requires")]
#[test_case("Fragment-Host", "fragHost")]
#[test_case("Bundle-RequiredExecutionEnvironment", "bree")]
fn HeaderFieldRegistry___standard___maps_header_to_attr_and_field(header: &str, attr: &str) {
    let registry = HeaderFieldRegistry::standard();

    assert_eq!(registry.attr_name(header), Some(attr));
    assert_eq!(registry.field_key(attr).map(|k| k.name()), Some(header));
}

#[test]
fn HeaderFieldRegistry___standard___has_four_record_fields() {
    let registry = HeaderFieldRegistry::standard();

    let headers: Vec<&str> = registry.record_fields().iter().map(|k| k.name()).collect();

    assert_eq!(
        headers,
        vec![
            "Provide-Capability",
            "Require-Capability",
            "Fragment-Host",
            "Bundle-RequiredExecutionEnvironment",
        ]
    );
    assert!(registry.record_field("Fragment-Host").is_some());
    assert!(registry.record_field("Bundle-SymbolicName").is_none());
}

#[test]
fn HeaderFieldRegistry___unknown_names___return_none() {
    let registry = HeaderFieldRegistry::standard();

    assert!(registry.attr_name("Main-Class").is_none());
    assert!(registry.field_key("Bundle-SymbolicName").is_none());
}

#[test]
fn HeaderFieldRegistry___header_lookup___is_exact() {
    let registry = HeaderFieldRegistry::standard();

    assert!(registry.attr_name("bundle-symbolicname").is_none());
}

#[test]
fn HeaderFieldRegistry___select_fields___matches_expected_clause() {
    let registry = HeaderFieldRegistry::standard();

    assert_eq!(
        registry.select_fields(),
        "attributes.osgi.bsn as bsn, attributes.osgi.bv as bv, \
         attributes.osgi.exports as exports, attributes.osgi.exportService as exportService, \
         attributes.osgi.description as description, attributes.osgi.name as name, \
         attributes.osgi.license as license, attributes.osgi.docUrl as docUrl, \
         attributes.osgi.reqBundle as reqBundle, attributes.osgi.provides as provides, \
         attributes.osgi.requires as requires, attributes.osgi.fragHost as fragHost, \
         attributes.osgi.bree as bree"
    );
}

#[test]
fn HeaderFieldRegistry___select_fields___has_no_trailing_separator() {
    let registry = HeaderFieldRegistry::standard();

    assert!(!registry.select_fields().ends_with(','));
    assert!(!registry.select_fields().ends_with(", "));
}

#[test]
fn HeaderFieldRegistry___empty_builder___has_empty_select_fields() {
    let registry = HeaderFieldRegistry::builder().build();

    assert_eq!(registry.select_fields(), "");
    assert!(registry.mappings().is_empty());
}

#[test]
fn HeaderFieldRegistry___global___is_built_once() {
    let first = HeaderFieldRegistry::global();
    let second = HeaderFieldRegistry::global();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.select_fields(), HeaderFieldRegistry::standard().select_fields());
}

#[test]
fn HeaderFieldRegistry___is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<HeaderFieldRegistry>();
}

#[test]
fn RegistryBuilder___duplicate_header___replaces_in_place() {
    let registry = HeaderFieldRegistry::builder()
        .header("Bundle-SymbolicName", "bsn")
        .header("Bundle-Version", "bv")
        .header("Bundle-SymbolicName", "symbolicName")
        .build();

    let attrs: Vec<&str> = registry.attr_names().collect();

    assert_eq!(attrs, vec!["symbolicName", "bv"]);
    assert!(registry.field_key("bsn").is_none());
}

#[test]
fn RegistryBuilder___duplicate_attr___replaces_in_place() {
    let registry = HeaderFieldRegistry::builder()
        .header("Bundle-Name", "name")
        .header("Bundle-Version", "bv")
        .header("Implementation-Title", "name")
        .build();

    assert_eq!(registry.mappings().len(), 2);
    assert_eq!(registry.attr_name("Implementation-Title"), Some("name"));
    assert!(registry.attr_name("Bundle-Name").is_none());
    assert_eq!(registry.mappings()[0].header(), "Implementation-Title");
}

#[test]
fn RegistryBuilder___mapping_clashing_with_two_entries___keeps_one() {
    let registry = HeaderFieldRegistry::builder()
        .header("A", "a")
        .header("B", "b")
        .header("A", "b")
        .build();

    assert_eq!(registry.mappings().len(), 1);
    assert_eq!(registry.select_fields(), "attributes.osgi.b as b");
}

#[test]
fn RegistryBuilder___duplicate_record_field___is_ignored() {
    let registry = HeaderFieldRegistry::builder()
        .record_field("Fragment-Host")
        .record_field("Fragment-Host")
        .build();

    assert_eq!(registry.record_fields().len(), 1);
}
