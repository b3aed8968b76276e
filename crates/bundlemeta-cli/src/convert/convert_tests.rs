#![allow(non_snake_case)]

use super::*;
use bundlemeta_core::SHA256;
use std::io::Cursor;

fn registry() -> &'static HeaderFieldRegistry {
    HeaderFieldRegistry::global()
}

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn expand___compact_lines___writes_records() {
    let input = "{\"sha256\":\"abc\",\"Fragment-Host\":\"host\"}\n\n{\"sha256\":\"def\"}\n";
    let mut out = Vec::new();

    let count = expand(registry(), Cursor::new(input), &mut out).unwrap();

    assert_eq!(count, 2);
    let lines = lines(out);
    assert_eq!(lines.len(), 2);
    let record: Record = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(record.get_str(&SHA256), Some("abc"));
}

#[test]
fn expand___bad_line___errors_with_line_number() {
    let input = "{\"sha256\":\"abc\"}\nnot json\n";
    let mut out = Vec::new();

    let err = expand(registry(), Cursor::new(input), &mut out).unwrap_err();

    assert!(err.to_string().contains("line 2"));
}

#[test]
fn compact___records___omits_absent_fields() {
    let input = "{\"sha256\":\"abc\",\"Fragment-Host\":\"com.example.host\"}\n";
    let mut out = Vec::new();

    let count = compact(registry(), Cursor::new(input), &mut out).unwrap();

    assert_eq!(count, 1);
    let compact: CompactMap = serde_json::from_str(&lines(out)[0]).unwrap();
    assert_eq!(compact.len(), 2);
    assert_eq!(compact["Fragment-Host"], "com.example.host");
    assert!(!compact.contains_key("Require-Capability"));
}

#[test]
fn compact___then_expand___round_trips() {
    let input = "{\"sha256\":\"abc\",\"Bundle-SymbolicName\":\"com.example\",\"Import-Package\":\"org.slf4j\"}\n";
    let mut compacted = Vec::new();
    compact(registry(), Cursor::new(input), &mut compacted).unwrap();

    let mut expanded = Vec::new();
    expand(registry(), Cursor::new(compacted), &mut expanded).unwrap();

    let original: Record = serde_json::from_str(input.trim()).unwrap();
    let restored: Record = serde_json::from_str(&lines(expanded)[0]).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn open_input___missing_file___errors() {
    let result = open_input(Some(Path::new("/nonexistent/entries.jsonl")));

    assert!(result.is_err());
}
