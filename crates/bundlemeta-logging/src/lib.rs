//! bundlemeta-logging - tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] installing the process-wide subscriber from a [`BundleMetaConfig`]
//! - [`parse_filter`] validating level directives
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the binary.
//!
//! [`BundleMetaConfig`]: bundlemeta_core::BundleMetaConfig

mod subscriber;

pub use bundlemeta_core::LogFormat;
pub use subscriber::{LoggingError, init_logging, parse_filter};
