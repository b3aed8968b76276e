//! Process-wide subscriber installation

use bundlemeta_core::{BundleMetaConfig, LogFormat};
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Parse a level or directive list such as `info` or `bundlemeta_jar=debug,warn`
pub fn parse_filter(spec: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(spec).map_err(|e| LoggingError::InvalidFilter {
        filter: spec.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber described by `config`
///
/// A non-empty `RUST_LOG` overrides `config.log_level`. Output goes to stderr
/// so stdout stays free for command results. Only the first call installs
/// anything; it returns `Ok(true)`, later calls return `Ok(false)`.
pub fn init_logging(config: &BundleMetaConfig) -> Result<bool, LoggingError> {
    let mut installed_now = false;
    INSTALLED.get_or_try_init(|| {
        install(config)?;
        installed_now = true;
        Ok::<(), LoggingError>(())
    })?;
    Ok(installed_now)
}

fn install(config: &BundleMetaConfig) -> Result<(), LoggingError> {
    let spec = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(spec) if !spec.trim().is_empty() => spec,
        _ => config.log_level.clone(),
    };
    let filter = parse_filter(&spec)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;

    tracing::debug!(filter = %spec, format = ?config.log_format, "logging initialized");
    Ok(())
}
