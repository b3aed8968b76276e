//! Projected attribute rows to records
//!
//! The query collaborator selects `attributes.osgi.<name> as <name>` for every
//! registered attribute (see [`HeaderFieldRegistry::select_fields`]) and hands
//! back one row per asset keyed by attribute name. These rows are copied into
//! index records under each header's field key.

use bundlemeta_core::{AttributeMap, HeaderFieldRegistry, OSGI_ROOT, Record};
use serde_json::{Map, Value};
use tracing::trace;

/// One projected query row, keyed by attribute name
pub type ProjectedRow = Map<String, Value>;

/// Copy every registered attribute present in `row` into `record`
///
/// Null and missing columns are skipped. Non-string scalars are stored in
/// their JSON text form. Returns the number of fields written.
pub fn add_osgi_fields_to_record(
    registry: &HeaderFieldRegistry,
    record: &mut Record,
    row: &ProjectedRow,
) -> usize {
    let mut written = 0;
    for mapping in registry.mappings() {
        let value = match row.get(mapping.attr_name()) {
            None | Some(Value::Null) => continue,
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };
        trace!(attr = mapping.attr_name(), field = %mapping.field_key(), "projected osgi field");
        record.put(mapping.field_key(), value);
        written += 1;
    }
    written
}

/// Evaluate the select-fields projection against an in-memory attribute container
///
/// Produces the row the query collaborator would return for this asset: one
/// column per registered attribute present in the `osgi` namespace.
pub fn project_attributes(registry: &HeaderFieldRegistry, attributes: &AttributeMap) -> ProjectedRow {
    let Some(osgi) = attributes.child(OSGI_ROOT) else {
        return ProjectedRow::new();
    };
    registry
        .attr_names()
        .filter_map(|attr| osgi.get(attr).map(|value| (attr.to_string(), value.clone())))
        .collect()
}
