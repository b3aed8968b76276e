//! bundlemeta-index - OSGi fields in index records
//!
//! This crate provides:
//! - [`RecordExpander`] and [`RecordCompactor`] seams to the base record logic
//! - [`OsgiRecordCodec`] layering OSGi fields over a base codec
//! - [`add_osgi_fields_to_record`] copying a projected attribute row into a record
//! - [`JsonLineCodec`] for reading and writing entries one JSON object per line

mod codec;
mod error;
mod osgi;
mod projection;

pub use codec::JsonLineCodec;
pub use error::{IndexError, IndexResult};
pub use osgi::{
    OsgiRecordCodec, RecordCompactor, RecordExpander, VerbatimCodec, compact_overlay,
    expand_overlay,
};
pub use projection::{ProjectedRow, add_osgi_fields_to_record, project_attributes};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        JsonLineCodec, OsgiRecordCodec, RecordCompactor, RecordExpander, VerbatimCodec,
        add_osgi_fields_to_record,
    };
}
