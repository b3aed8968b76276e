//! bundlemeta-core - OSGi header registry and index data model
//!
//! This crate provides the shared, read-only pieces every bundlemeta operation
//! is built on:
//! - [`HeaderFieldRegistry`] mapping manifest headers to attribute names and record fields
//! - [`AttributeMap`] the nested attribute container attached to a stored asset
//! - [`Record`] and [`CompactMap`] the two forms of an index entry
//! - [`BundleMetaConfig`] for runtime configuration

mod attributes;
mod config;
mod error;
mod field;
mod record;
mod registry;

pub use attributes::{AttributeMap, Namespace, NamespaceMut};
pub use config::{BundleMetaConfig, LogFormat};
pub use error::{CoreError, CoreResult};
pub use field::{EntryKey, FieldType, FieldValue};
pub use record::{CompactMap, Record, SHA256};
pub use registry::{HeaderFieldRegistry, HeaderMapping, RegistryBuilder};

/// Root namespace under which extracted headers are stored.
pub const OSGI_ROOT: &str = "osgi";

/// Compact map key carrying the archive checksum.
pub const SHA256_KEY: &str = "sha256";

/// Manifest header whose presence marks an archive as an OSGi bundle.
pub const BUNDLE_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AttributeMap, BundleMetaConfig, CompactMap, CoreError, CoreResult, EntryKey,
        HeaderFieldRegistry, OSGI_ROOT, Record, SHA256, SHA256_KEY,
    };
}
