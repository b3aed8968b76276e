//! bundlemeta CLI - OSGi bundle metadata tool
//!
//! Commands:
//! - `bundlemeta inspect` - Show the OSGi attributes extracted from an archive
//! - `bundlemeta select-fields` - Print the attribute projection clause
//! - `bundlemeta index-entry` - Build the compact index entry for an archive
//! - `bundlemeta expand` - Convert compact maps (JSON lines) to records
//! - `bundlemeta compact` - Convert records (JSON lines) to compact maps

use bundlemeta_core::HeaderFieldRegistry;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

mod config;
mod convert;
mod entry;
mod inspect;

#[derive(Parser)]
#[command(name = "bundlemeta")]
#[command(author, version, about = "OSGi bundle metadata for repository indexes", long_about = None)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directives (overrides the configuration file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the OSGi attributes extracted from an archive
    Inspect {
        /// Path to the jar
        archive: PathBuf,
    },

    /// Print the select-fields clause projecting every OSGi attribute
    SelectFields,

    /// Build the compact index entry (checksum and OSGi fields) for an archive
    IndexEntry {
        /// Path to the jar
        archive: PathBuf,

        /// Pretty-print the entry
        #[arg(short, long)]
        pretty: bool,
    },

    /// Convert compact maps to records, one JSON object per line
    Expand {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Convert records to compact maps, one JSON object per line
    Compact {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref(), cli.log_level)?;
    bundlemeta_logging::init_logging(&config)?;

    let registry = HeaderFieldRegistry::global();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Inspect { archive } => {
            inspect::run(registry, &config, &archive, &mut out)?;
        }
        Commands::SelectFields => {
            writeln!(out, "{}", registry.select_fields())?;
        }
        Commands::IndexEntry { archive, pretty } => {
            entry::run(registry, &config, &archive, pretty, &mut out)?;
        }
        Commands::Expand { input } => {
            convert::expand(registry, convert::open_input(input.as_deref())?, &mut out)?;
        }
        Commands::Compact { input } => {
            convert::compact(registry, convert::open_input(input.as_deref())?, &mut out)?;
        }
    }

    Ok(())
}
