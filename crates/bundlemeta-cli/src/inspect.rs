//! Inspect command - show the OSGi attributes of an archive

use anyhow::{Context, Result};
use bundlemeta_core::{AttributeMap, BundleMetaConfig, HeaderFieldRegistry};
use bundlemeta_jar::{ExtractOutcome, OsgiExtractor};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Extract the archive's OSGi attributes and print them as JSON.
pub fn run<W: Write>(
    registry: &HeaderFieldRegistry,
    config: &BundleMetaConfig,
    archive: &Path,
    out: &mut W,
) -> Result<()> {
    let mut attributes = AttributeMap::new();
    let outcome = OsgiExtractor::with_config(registry, config).extract_file(archive, &mut attributes);

    match outcome {
        ExtractOutcome::Extracted { headers } => {
            info!(archive = %archive.display(), headers, "extracted osgi attributes");
            writeln!(out, "{}", serde_json::to_string_pretty(&attributes)?)?;
        }
        ExtractOutcome::NoManifest => {
            writeln!(out, "{}: no manifest", archive.display())?;
        }
        ExtractOutcome::NotABundle => {
            writeln!(out, "{}: not an OSGi bundle", archive.display())?;
        }
        ExtractOutcome::Failed(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read archive: {}", archive.display()));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "inspect/inspect_tests.rs"]
mod inspect_tests;
