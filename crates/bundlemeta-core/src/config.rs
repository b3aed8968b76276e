//! Runtime configuration types

use crate::CoreResult;
use serde::{Deserialize, Serialize};

/// Runtime configuration shared by the extractor and the command-line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleMetaConfig {
    /// Initial log level filter (overridden by `RUST_LOG` when set)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Upper bound on the size of an archive's manifest entry
    ///
    /// Manifests larger than this are treated as unreadable rather than
    /// buffered in full.
    #[serde(default = "default_max_manifest_bytes")]
    pub max_manifest_bytes: u64,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// JSON structured logs
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_manifest_bytes() -> u64 {
    1024 * 1024
}

impl Default for BundleMetaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            max_manifest_bytes: default_max_manifest_bytes(),
        }
    }
}

impl BundleMetaConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Set the log level filter
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the manifest size bound
    #[must_use]
    pub fn with_max_manifest_bytes(mut self, limit: u64) -> Self {
        self.max_manifest_bytes = limit;
        self
    }
}
