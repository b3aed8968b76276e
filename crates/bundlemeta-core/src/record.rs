//! Index entry representations
//!
//! An index entry exists in two forms: the typed, in-memory [`Record`] used
//! while building or reading an index, and the flat [`CompactMap`] exchanged
//! through the index file format.

use crate::field::{EntryKey, FieldType, FieldValue};
use crate::{CoreError, CoreResult, SHA256_KEY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat key/value form of one index entry
pub type CompactMap = BTreeMap<String, String>;

/// Record field holding the archive's SHA-256 checksum
pub const SHA256: EntryKey<String> = EntryKey::of(SHA256_KEY);

/// Typed form of one index entry
///
/// A field is present only when it was explicitly put; there are no empty or
/// null placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if there was one
    pub fn put<T: FieldType>(&mut self, key: &EntryKey<T>, value: T) -> Option<FieldValue> {
        self.fields.insert(key.name().to_string(), value.into_value())
    }

    /// Get a field's value
    ///
    /// Returns `None` when the field is absent or holds another type; use
    /// [`Record::try_get`] to tell the two apart.
    pub fn get<T: FieldType>(&self, key: &EntryKey<T>) -> Option<T> {
        self.fields.get(key.name()).and_then(T::from_value)
    }

    /// Get a field's value, failing if it holds another type
    pub fn try_get<T: FieldType>(&self, key: &EntryKey<T>) -> CoreResult<Option<T>> {
        match self.fields.get(key.name()) {
            None => Ok(None),
            Some(value) => T::from_value(value).map(Some).ok_or_else(|| CoreError::FieldType {
                field: key.name().to_string(),
                expected: T::NAME,
                actual: value.type_name(),
            }),
        }
    }

    /// Borrow a string field without cloning it
    pub fn get_str(&self, key: &EntryKey<String>) -> Option<&str> {
        self.fields.get(key.name()).and_then(FieldValue::as_str)
    }

    pub fn contains<T>(&self, key: &EntryKey<T>) -> bool {
        self.fields.contains_key(key.name())
    }

    pub fn remove<T>(&mut self, key: &EntryKey<T>) -> Option<FieldValue> {
        self.fields.remove(key.name())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
