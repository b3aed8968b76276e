//! Nested attribute containers attached to stored assets

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed, arbitrarily nested attribute container of one asset
///
/// Top-level keys usually name namespaces (child objects) owned by different
/// formats. Extraction only ever touches its own namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    backing: Map<String, Value>,
}

/// Read-only view of a child namespace
#[derive(Debug, Clone, Copy)]
pub struct Namespace<'a> {
    entries: &'a Map<String, Value>,
}

/// Mutable view of a child namespace
#[derive(Debug)]
pub struct NamespaceMut<'a> {
    entries: &'a mut Map<String, Value>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(backing: Map<String, Value>) -> Self {
        Self { backing }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.backing
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.backing
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.backing.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.backing.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.backing.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.backing.remove(key)
    }

    /// Borrow an existing child namespace
    ///
    /// Returns `None` if the key is absent or holds a non-object value.
    pub fn child(&self, name: &str) -> Option<Namespace<'_>> {
        match self.backing.get(name) {
            Some(Value::Object(entries)) => Some(Namespace { entries }),
            _ => None,
        }
    }

    /// Borrow a child namespace for writing, creating it if absent
    ///
    /// Fails without modifying the container if `name` holds a non-object value.
    pub fn child_mut(&mut self, name: &str) -> CoreResult<NamespaceMut<'_>> {
        let slot = self
            .backing
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match slot {
            Value::Object(entries) => Ok(NamespaceMut { entries }),
            _ => Err(CoreError::NotANamespace(name.to_string())),
        }
    }
}

impl From<Map<String, Value>> for AttributeMap {
    fn from(backing: Map<String, Value>) -> Self {
        Self::from_map(backing)
    }
}

impl<'a> Namespace<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The namespace as a JSON object, e.g. to hand to a row consumer
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.entries
    }
}

impl NamespaceMut<'_> {
    /// Set a string attribute, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<Value> {
        self.entries.insert(key.into(), Value::String(value.into()))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "attributes/attributes_tests.rs"]
mod attributes_tests;
