//! Expand and compact commands - convert index entries between forms

use anyhow::{Context, Result};
use bundlemeta_core::{CompactMap, HeaderFieldRegistry, Record};
use bundlemeta_index::{JsonLineCodec, OsgiRecordCodec, RecordCompactor, RecordExpander};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Open `path` for line reading, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Expand each compact map in `input` to a record. Returns the entry count.
pub fn expand<R: BufRead, W: Write>(
    registry: &HeaderFieldRegistry,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let codec = JsonLineCodec::new();
    let osgi = OsgiRecordCodec::new(registry);

    let mut count = 0;
    for compact in codec.decode_lines::<CompactMap, _>(input) {
        let record = osgi.expand(&compact?);
        writeln!(out, "{}", codec.encode(&record)?)?;
        count += 1;
    }

    debug!(count, "expanded entries");
    Ok(count)
}

/// Compact each record in `input` to a compact map. Returns the entry count.
pub fn compact<R: BufRead, W: Write>(
    registry: &HeaderFieldRegistry,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let codec = JsonLineCodec::new();
    let osgi = OsgiRecordCodec::new(registry);

    let mut count = 0;
    for record in codec.decode_lines::<Record, _>(input) {
        let compact = osgi.compact(&record?);
        writeln!(out, "{}", codec.encode(&compact)?)?;
        count += 1;
    }

    debug!(count, "compacted entries");
    Ok(count)
}

#[cfg(test)]
#[path = "convert/convert_tests.rs"]
mod convert_tests;
