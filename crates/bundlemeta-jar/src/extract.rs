//! OSGi attribute extraction.
//!
//! The [`OsgiExtractor`] reads an archive's manifest and, when the archive is a
//! bundle, copies every tracked header into the `osgi` namespace of the
//! asset's attributes.

use crate::{ExtractError, MANIFEST_PATH, Manifest};
use bundlemeta_core::{
    AttributeMap, BUNDLE_SYMBOLIC_NAME, BundleMetaConfig, HeaderFieldRegistry, OSGI_ROOT,
};
use std::fs::File;
use std::io::{self, Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, trace};
use zip::ZipArchive;
use zip::read::read_zipfile_from_stream;

/// Result of one extraction attempt.
#[derive(Debug)]
pub enum ExtractOutcome {
    /// The archive is a bundle; `headers` attributes were written.
    Extracted { headers: usize },
    /// The archive has no manifest.
    NoManifest,
    /// The manifest has no `Bundle-SymbolicName`.
    NotABundle,
    /// The archive could not be read. Attributes were not modified.
    Failed(ExtractError),
}

impl ExtractOutcome {
    /// Whether OSGi attributes were written.
    #[must_use]
    pub fn is_extracted(&self) -> bool {
        matches!(self, ExtractOutcome::Extracted { .. })
    }

    /// The read error, if the attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            ExtractOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Extracts OSGi manifest headers into asset attributes.
///
/// # Example
///
/// ```no_run
/// use bundlemeta_core::{AttributeMap, HeaderFieldRegistry};
/// use bundlemeta_jar::OsgiExtractor;
///
/// let extractor = OsgiExtractor::new(HeaderFieldRegistry::global());
/// let mut attributes = AttributeMap::new();
///
/// let outcome = extractor.extract_file("my-bundle-1.0.0.jar", &mut attributes);
/// if outcome.is_extracted() {
///     println!("{}", attributes.child("osgi").unwrap().get_str("bsn").unwrap());
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OsgiExtractor<'r> {
    registry: &'r HeaderFieldRegistry,
    max_manifest_bytes: u64,
}

impl<'r> OsgiExtractor<'r> {
    /// Create an extractor with the default manifest size bound.
    #[must_use]
    pub fn new(registry: &'r HeaderFieldRegistry) -> Self {
        Self::with_config(registry, &BundleMetaConfig::default())
    }

    /// Create an extractor configured from `config`.
    #[must_use]
    pub fn with_config(registry: &'r HeaderFieldRegistry, config: &BundleMetaConfig) -> Self {
        Self {
            registry,
            max_manifest_bytes: config.max_manifest_bytes,
        }
    }

    /// Extract OSGi attributes from an archive stream.
    ///
    /// The stream is consumed and dropped before this returns. Read failures
    /// are logged at debug level and returned as [`ExtractOutcome::Failed`];
    /// they never leave partial attributes behind.
    pub fn extract<R: Read + Seek>(
        &self,
        archive: R,
        attributes: &mut AttributeMap,
    ) -> ExtractOutcome {
        self.finish(self.read_manifest(archive), attributes)
    }

    /// Extract OSGi attributes from a forward-only archive stream.
    ///
    /// Entries are scanned in order and the first one named like the manifest
    /// (ignoring case) is read, so the archive is never buffered in full. Use
    /// [`extract`](Self::extract) when the stream is seekable; reading the
    /// central directory tolerates more archive layouts.
    pub fn extract_stream<R: Read>(
        &self,
        archive: R,
        attributes: &mut AttributeMap,
    ) -> ExtractOutcome {
        self.finish(self.read_manifest_stream(archive), attributes)
    }

    /// Extract OSGi attributes from in-memory archive bytes.
    pub fn extract_bytes(&self, bytes: &[u8], attributes: &mut AttributeMap) -> ExtractOutcome {
        self.extract(Cursor::new(bytes), attributes)
    }

    /// Extract OSGi attributes from an archive on disk.
    pub fn extract_file<P: AsRef<Path>>(
        &self,
        path: P,
        attributes: &mut AttributeMap,
    ) -> ExtractOutcome {
        match File::open(path.as_ref()) {
            Ok(file) => self.extract(file, attributes),
            Err(err) => {
                debug!(path = %path.as_ref().display(), error = %err, "failed to open archive");
                ExtractOutcome::Failed(err.into())
            }
        }
    }

    /// Read the archive's manifest, if it has one.
    pub fn read_manifest<R: Read + Seek>(
        &self,
        archive: R,
    ) -> Result<Option<Manifest>, ExtractError> {
        let mut archive = ZipArchive::new(archive)?;
        let Some(index) = manifest_index(&archive) else {
            return Ok(None);
        };

        let entry = archive.by_index(index)?;
        Ok(Some(self.read_bounded(entry)?))
    }

    /// Read the manifest of a forward-only archive stream, if it has one.
    pub fn read_manifest_stream<R: Read>(
        &self,
        mut archive: R,
    ) -> Result<Option<Manifest>, ExtractError> {
        while let Some(mut entry) = read_zipfile_from_stream(&mut archive)? {
            if entry.name().eq_ignore_ascii_case(MANIFEST_PATH) {
                return Ok(Some(self.read_bounded(&mut entry)?));
            }
            io::copy(&mut entry, &mut io::sink())?;
        }
        Ok(None)
    }

    fn read_bounded<E: Read>(&self, entry: E) -> Result<Manifest, ExtractError> {
        let mut bytes = Vec::new();
        entry
            .take(self.max_manifest_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > self.max_manifest_bytes {
            return Err(ExtractError::ManifestTooLarge {
                limit: self.max_manifest_bytes,
            });
        }
        Ok(Manifest::parse(&bytes)?)
    }

    fn finish(
        &self,
        manifest: Result<Option<Manifest>, ExtractError>,
        attributes: &mut AttributeMap,
    ) -> ExtractOutcome {
        let outcome = match manifest {
            Ok(Some(manifest)) => self.apply(&manifest, attributes),
            Ok(None) => ExtractOutcome::NoManifest,
            Err(err) => ExtractOutcome::Failed(err),
        };

        if let ExtractOutcome::Failed(err) = &outcome {
            debug!(error = %err, "failed to extract osgi attributes for asset");
        }
        outcome
    }

    fn apply(&self, manifest: &Manifest, attributes: &mut AttributeMap) -> ExtractOutcome {
        let main = manifest.main_attributes();
        if !main.contains(BUNDLE_SYMBOLIC_NAME) {
            return ExtractOutcome::NotABundle;
        }

        let mut osgi = match attributes.child_mut(OSGI_ROOT) {
            Ok(namespace) => namespace,
            Err(err) => return ExtractOutcome::Failed(err.into()),
        };

        let mut headers = 0;
        for mapping in self.registry.mappings() {
            if let Some(value) = main.get(mapping.header()) {
                trace!(header = mapping.header(), attr = mapping.attr_name(), "set osgi attribute");
                osgi.set(mapping.attr_name(), value);
                headers += 1;
            }
        }
        ExtractOutcome::Extracted { headers }
    }
}

/// Index of the manifest entry, matching its path without regard to case.
fn manifest_index<R: Read + Seek>(archive: &ZipArchive<R>) -> Option<usize> {
    if let Some(index) = archive.index_for_name(MANIFEST_PATH) {
        return Some(index);
    }
    let name = archive
        .file_names()
        .find(|name| name.eq_ignore_ascii_case(MANIFEST_PATH))
        .map(str::to_owned)?;
    archive.index_for_name(&name)
}
