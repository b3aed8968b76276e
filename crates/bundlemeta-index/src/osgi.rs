//! Record expansion and compaction with OSGi fields
//!
//! Base record logic (coordinates, timestamps, classifiers...) lives behind the
//! [`RecordExpander`] and [`RecordCompactor`] traits. [`OsgiRecordCodec`] runs
//! the base step first and then overlays the checksum and the OSGi headers the
//! registry marks as record fields.

use bundlemeta_core::{
    CompactMap, EntryKey, FieldValue, HeaderFieldRegistry, Record, SHA256, SHA256_KEY,
};

/// Turns a compact map into a record
pub trait RecordExpander {
    fn expand(&self, compact: &CompactMap) -> Record;
}

/// Turns a record into a compact map
pub trait RecordCompactor {
    fn compact(&self, record: &Record) -> CompactMap;
}

impl<F> RecordExpander for F
where
    F: Fn(&CompactMap) -> Record,
{
    fn expand(&self, compact: &CompactMap) -> Record {
        self(compact)
    }
}

impl<F> RecordCompactor for F
where
    F: Fn(&Record) -> CompactMap,
{
    fn compact(&self, record: &Record) -> CompactMap {
        self(record)
    }
}

/// Base codec carrying every entry through unchanged
///
/// Each compact entry becomes a string field of the same name. On the way back
/// every string field is written under its name; typed fields are left to
/// richer base codecs.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimCodec;

impl RecordExpander for VerbatimCodec {
    fn expand(&self, compact: &CompactMap) -> Record {
        let mut record = Record::new();
        for (name, value) in compact {
            record.put(&EntryKey::new(name.as_str()), value.clone());
        }
        record
    }
}

impl RecordCompactor for VerbatimCodec {
    fn compact(&self, record: &Record) -> CompactMap {
        record
            .iter()
            .filter_map(|(name, value)| match value {
                FieldValue::Text(text) => Some((name.to_string(), text.clone())),
                _ => None,
            })
            .collect()
    }
}

/// Add the checksum and OSGi record fields found in `compact` to `record`
pub fn expand_overlay(registry: &HeaderFieldRegistry, compact: &CompactMap, record: &mut Record) {
    if let Some(checksum) = compact.get(SHA256_KEY) {
        record.put(&SHA256, checksum.clone());
    }
    for key in registry.record_fields() {
        if let Some(value) = compact.get(key.name()) {
            record.put(key, value.clone());
        }
    }
}

/// Write the checksum and OSGi record fields present in `record` to `compact`
///
/// Absent fields are omitted, never written as empty strings.
pub fn compact_overlay(registry: &HeaderFieldRegistry, record: &Record, compact: &mut CompactMap) {
    if let Some(checksum) = record.get_str(&SHA256) {
        compact.insert(SHA256_KEY.to_string(), checksum.to_string());
    }
    for key in registry.record_fields() {
        if let Some(value) = record.get_str(key) {
            compact.insert(key.name().to_string(), value.to_string());
        }
    }
}

/// Expander and compactor layering OSGi fields over a base codec
///
/// # Example
///
/// ```
/// use bundlemeta_core::{CompactMap, HeaderFieldRegistry, SHA256};
/// use bundlemeta_index::{OsgiRecordCodec, RecordCompactor, RecordExpander};
///
/// let codec = OsgiRecordCodec::new(HeaderFieldRegistry::global());
/// let compact: CompactMap = [("sha256", "abc123"), ("Fragment-Host", "host.bundle")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
///
/// let record = codec.expand(&compact);
/// assert_eq!(record.get_str(&SHA256), Some("abc123"));
/// assert_eq!(codec.compact(&record), compact);
/// ```
#[derive(Debug, Clone)]
pub struct OsgiRecordCodec<'r, B = VerbatimCodec> {
    registry: &'r HeaderFieldRegistry,
    base: B,
}

impl<'r> OsgiRecordCodec<'r> {
    /// Codec over [`VerbatimCodec`]
    pub fn new(registry: &'r HeaderFieldRegistry) -> Self {
        Self::with_base(registry, VerbatimCodec)
    }
}

impl<'r, B> OsgiRecordCodec<'r, B> {
    /// Codec over a caller-supplied base
    pub fn with_base(registry: &'r HeaderFieldRegistry, base: B) -> Self {
        Self { registry, base }
    }

    pub fn registry(&self) -> &'r HeaderFieldRegistry {
        self.registry
    }

    pub fn base(&self) -> &B {
        &self.base
    }
}

impl<B: RecordExpander> RecordExpander for OsgiRecordCodec<'_, B> {
    fn expand(&self, compact: &CompactMap) -> Record {
        let mut record = self.base.expand(compact);
        expand_overlay(self.registry, compact, &mut record);
        record
    }
}

impl<B: RecordCompactor> RecordCompactor for OsgiRecordCodec<'_, B> {
    fn compact(&self, record: &Record) -> CompactMap {
        let mut compact = self.base.compact(record);
        compact_overlay(self.registry, record, &mut compact);
        compact
    }
}
