//! Error types for archive reading.

use thiserror::Error;

/// Errors raised while reading a manifest's main section.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest bytes are not UTF-8.
    #[error("manifest is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A line is neither a `Name: value` header nor a continuation.
    #[error("invalid header field on line {line}")]
    InvalidHeader { line: usize },

    /// A continuation line appears before any header.
    #[error("continuation without a header on line {line}")]
    OrphanContinuation { line: usize },
}

/// Errors that make an archive's metadata unreadable.
///
/// These never escape [`OsgiExtractor::extract`](crate::OsgiExtractor::extract);
/// they are reported through [`ExtractOutcome::Failed`](crate::ExtractOutcome::Failed).
#[derive(Debug, Error)]
pub enum ExtractError {
    /// I/O error while reading the archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream is not a readable zip container.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The manifest entry could not be read.
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] ManifestError),

    /// The manifest entry is larger than the configured bound.
    #[error("Manifest exceeds {limit} bytes")]
    ManifestTooLarge { limit: u64 },

    /// The asset's attribute container cannot hold the namespace.
    #[error("Attribute container: {0}")]
    Attributes(#[from] bundlemeta_core::CoreError),
}
