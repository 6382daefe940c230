//! Entity-kind inference from resource names
//!
//! A resource name looks like `customers/<id>/<collection>/<local id>`. Only
//! the collection segment matters here; the ids are never inspected.

use super::lexicon;
use crate::types::EntityKind;
use serde_json::Value;

const ROOT_SEGMENT: &str = "customers";

/// Infer the entity kind named by a resource name.
///
/// Returns `None` for anything that is not a `customers/...` path with at
/// least three segments, or whose collection segment is not in the lexicon.
pub fn infer_from_resource_name(resource_name: &str) -> Option<EntityKind> {
    let mut segments = resource_name.split('/');

    if segments.next()? != ROOT_SEGMENT {
        return None;
    }
    let _customer_id = segments.next()?;
    let collection = segments.next()?;

    lexicon::lookup(collection)
}

/// Same as [`infer_from_resource_name`], for an arbitrary JSON value.
/// Non-string values infer nothing.
pub fn infer_from_value(value: Option<&Value>) -> Option<EntityKind> {
    value
        .and_then(Value::as_str)
        .and_then(infer_from_resource_name)
}
