//! Jar manifest extraction for bundlemeta
//!
//! This crate reads the main section of a jar's `META-INF/MANIFEST.MF` and
//! lifts the OSGi headers tracked by a
//! [`HeaderFieldRegistry`](bundlemeta_core::HeaderFieldRegistry) into the
//! `osgi` namespace of an asset's attributes.
//!
//! # Example
//!
//! ```no_run
//! use bundlemeta_core::{AttributeMap, HeaderFieldRegistry};
//! use bundlemeta_jar::{ExtractOutcome, OsgiExtractor};
//!
//! let mut attributes = AttributeMap::new();
//! let bytes = std::fs::read("my-bundle-1.0.0.jar")?;
//!
//! match OsgiExtractor::new(HeaderFieldRegistry::global()).extract_bytes(&bytes, &mut attributes) {
//!     ExtractOutcome::Extracted { headers } => println!("{headers} headers"),
//!     ExtractOutcome::NoManifest | ExtractOutcome::NotABundle => println!("not a bundle"),
//!     ExtractOutcome::Failed(err) => println!("unreadable: {err}"),
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod manifest;

pub mod checksum;
pub mod extract;

pub use checksum::{compute_sha256, sha256_reader};
pub use error::{ExtractError, ManifestError};
pub use extract::{ExtractOutcome, OsgiExtractor};
pub use manifest::{MainAttributes, Manifest};

/// Path of the manifest entry within a jar.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
