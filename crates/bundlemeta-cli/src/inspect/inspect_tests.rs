#![allow(non_snake_case)]

use super::*;
use std::io::Cursor;
use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn write_archive(entries: &[(&str, &str)]) -> NamedTempFile {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    let bytes = zip.finish().unwrap().into_inner();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file
}

fn inspect(path: &Path) -> Result<String> {
    let mut out = Vec::new();
    run(HeaderFieldRegistry::global(), &BundleMetaConfig::default(), path, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn run___bundle___prints_osgi_namespace() {
    let archive = write_archive(&[(
        "META-INF/MANIFEST.MF",
        "Manifest-Version: 1.0\r\nBundle-SymbolicName: com.example.foo\r\nBundle-Version: 1.2.3\r\n",
    )]);

    let output = inspect(archive.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["osgi"]["bsn"], "com.example.foo");
    assert_eq!(json["osgi"]["bv"], "1.2.3");
}

#[test]
fn run___plain_jar___reports_not_a_bundle() {
    let archive = write_archive(&[("META-INF/MANIFEST.MF", "Manifest-Version: 1.0\n")]);

    let output = inspect(archive.path()).unwrap();

    assert!(output.ends_with(": not an OSGi bundle\n"));
}

#[test]
fn run___no_manifest___reports_no_manifest() {
    let archive = write_archive(&[("com/example/Foo.class", "class bytes")]);

    let output = inspect(archive.path()).unwrap();

    assert!(output.ends_with(": no manifest\n"));
}

#[test]
fn run___not_a_zip___errors() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"definitely not a zip").unwrap();

    let err = inspect(file.path()).unwrap_err();

    assert!(err.to_string().contains("Failed to read archive"));
}
