//! Configuration loading

use anyhow::{Context, Result};
use bundlemeta_core::BundleMetaConfig;
use std::fs;
use std::path::Path;

/// Load the configuration file (if any) and apply command-line overrides.
pub fn load(path: Option<&Path>, log_level: Option<String>) -> Result<BundleMetaConfig> {
    let mut config = match path {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            BundleMetaConfig::from_json(&bytes)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => BundleMetaConfig::default(),
    };

    if let Some(level) = log_level {
        config = config.with_log_level(level);
    }

    Ok(config)
}
