//! Index-entry command - build the compact index entry for an archive

use anyhow::{Context, Result};
use bundlemeta_core::{
    AttributeMap, BundleMetaConfig, CompactMap, HeaderFieldRegistry, Record, SHA256,
};
use bundlemeta_index::{
    JsonLineCodec, OsgiRecordCodec, RecordCompactor, add_osgi_fields_to_record, project_attributes,
};
use bundlemeta_jar::{OsgiExtractor, sha256_reader};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Build the record an indexer would store for `archive`.
///
/// Archives without OSGi metadata, or whose metadata cannot be read, still
/// get an entry carrying the checksum.
pub fn build_record(
    registry: &HeaderFieldRegistry,
    config: &BundleMetaConfig,
    archive: &Path,
) -> Result<Record> {
    let file = File::open(archive)
        .with_context(|| format!("Failed to open archive: {}", archive.display()))?;
    let checksum = sha256_reader(file)
        .with_context(|| format!("Failed to hash archive: {}", archive.display()))?;

    // Unreadable metadata leaves the attributes untouched; the entry still gets indexed
    let mut attributes = AttributeMap::new();
    let outcome =
        OsgiExtractor::with_config(registry, config).extract_file(archive, &mut attributes);
    debug!(archive = %archive.display(), ?outcome, "extraction finished");

    let row = project_attributes(registry, &attributes);
    let mut record = Record::new();
    let fields = add_osgi_fields_to_record(registry, &mut record, &row);
    record.put(&SHA256, checksum);

    info!(archive = %archive.display(), fields, "built index record");
    Ok(record)
}

/// Print the compact index entry for `archive`.
pub fn run<W: Write>(
    registry: &HeaderFieldRegistry,
    config: &BundleMetaConfig,
    archive: &Path,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    let record = build_record(registry, config, archive)?;
    // A standalone archive has no coordinates for a base codec to carry
    let codec = OsgiRecordCodec::with_base(registry, |_: &Record| CompactMap::new());
    let compact = codec.compact(&record);

    let json = if pretty {
        JsonLineCodec::pretty()
    } else {
        JsonLineCodec::new()
    };
    writeln!(out, "{}", json.encode(&compact)?)?;

    Ok(())
}
