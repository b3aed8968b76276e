//! Header mapping registry
//!
//! The [`HeaderFieldRegistry`] is the single source of truth for which
//! manifest headers are tracked, the short attribute name each is stored under,
//! and the record field each is carried in. It is built once, never mutated,
//! and shared by reference between extraction, projection and record codecs.

use crate::OSGI_ROOT;
use crate::field::EntryKey;
use once_cell::sync::Lazy;

/// One tracked manifest header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMapping {
    header: &'static str,
    attr_name: &'static str,
    field_key: EntryKey<String>,
}

impl HeaderMapping {
    fn new(header: &'static str, attr_name: &'static str) -> Self {
        Self {
            header,
            attr_name,
            field_key: EntryKey::of(header),
        }
    }

    /// Manifest header name, e.g. `Bundle-SymbolicName`
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Short attribute name, e.g. `bsn`
    pub fn attr_name(&self) -> &'static str {
        self.attr_name
    }

    /// Record field carrying the header value, named after the header
    pub fn field_key(&self) -> &EntryKey<String> {
        &self.field_key
    }
}

/// Immutable header ↔ attribute ↔ record field table
#[derive(Debug, Clone)]
pub struct HeaderFieldRegistry {
    mappings: Vec<HeaderMapping>,
    record_fields: Vec<EntryKey<String>>,
    select_fields: String,
}

static STANDARD: Lazy<HeaderFieldRegistry> = Lazy::new(HeaderFieldRegistry::standard);

impl HeaderFieldRegistry {
    /// Start an empty registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The standard OSGi header table
    pub fn standard() -> Self {
        Self::builder()
            .header("Bundle-SymbolicName", "bsn")
            .header("Bundle-Version", "bv")
            .header("Export-Package", "exports")
            .header("Export-Service", "exportService")
            .header("Bundle-Description", "description")
            .header("Bundle-Name", "name")
            .header("Bundle-License", "license")
            .header("Bundle-DocURL", "docUrl")
            .header("Require-Bundle", "reqBundle")
            .header("Provide-Capability", "provides")
            .header("Require-Capability", "requires")
            .header("Fragment-Host", "fragHost")
            .header("Bundle-RequiredExecutionEnvironment", "bree")
            .record_field("Provide-Capability")
            .record_field("Require-Capability")
            .record_field("Fragment-Host")
            .record_field("Bundle-RequiredExecutionEnvironment")
            .build()
    }

    /// Process-wide instance of [`HeaderFieldRegistry::standard`], built on first use
    pub fn global() -> &'static Self {
        &STANDARD
    }

    /// All header mappings in registration order
    pub fn mappings(&self) -> &[HeaderMapping] {
        &self.mappings
    }

    /// Attribute name for a manifest header
    pub fn attr_name(&self, header: &str) -> Option<&'static str> {
        self.mappings
            .iter()
            .find(|m| m.header == header)
            .map(|m| m.attr_name)
    }

    /// Record field for an attribute name
    pub fn field_key(&self, attr_name: &str) -> Option<&EntryKey<String>> {
        self.mappings
            .iter()
            .find(|m| m.attr_name == attr_name)
            .map(|m| &m.field_key)
    }

    /// Attribute names in registration order
    pub fn attr_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.mappings.iter().map(|m| m.attr_name)
    }

    /// Headers carried directly between compact maps and records, keyed by header name
    pub fn record_fields(&self) -> &[EntryKey<String>] {
        &self.record_fields
    }

    /// Direct record field for a header, if it is carried in compact maps
    pub fn record_field(&self, header: &str) -> Option<&EntryKey<String>> {
        self.record_fields.iter().find(|k| k.name() == header)
    }

    /// Select-clause fragment projecting every attribute under its own name
    ///
    /// `attributes.osgi.<name> as <name>` for each attribute in registration
    /// order, separated by `, `.
    pub fn select_fields(&self) -> &str {
        &self.select_fields
    }
}

impl Default for HeaderFieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for a [`HeaderFieldRegistry`]
///
/// Registering a header or attribute name a second time replaces the earlier
/// mapping in place, keeping its position.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    mappings: Vec<HeaderMapping>,
    record_fields: Vec<EntryKey<String>>,
}

impl RegistryBuilder {
    /// Track `header`, stored under attribute `attr_name`
    #[must_use]
    pub fn header(mut self, header: &'static str, attr_name: &'static str) -> Self {
        let mapping = HeaderMapping::new(header, attr_name);
        let clashes = |m: &HeaderMapping| m.header == header || m.attr_name == attr_name;
        match self.mappings.iter().position(clashes) {
            Some(pos) => {
                self.mappings[pos] = mapping;
                let mut index = 0;
                self.mappings.retain(|m| {
                    let keep = index == pos || !clashes(m);
                    index += 1;
                    keep
                });
            }
            None => self.mappings.push(mapping),
        }
        self
    }

    /// Carry `header` directly between compact maps and records
    #[must_use]
    pub fn record_field(mut self, header: &'static str) -> Self {
        if !self.record_fields.iter().any(|k| k.name() == header) {
            self.record_fields.push(EntryKey::of(header));
        }
        self
    }

    /// Freeze the table and compute the select-fields clause
    pub fn build(self) -> HeaderFieldRegistry {
        let select_fields = self
            .mappings
            .iter()
            .map(|m| format!("attributes.{OSGI_ROOT}.{0} as {0}", m.attr_name))
            .collect::<Vec<_>>()
            .join(", ");
        HeaderFieldRegistry {
            mappings: self.mappings,
            record_fields: self.record_fields,
            select_fields,
        }
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
