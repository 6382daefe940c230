//! Operation shape and verb classification

use crate::types::Verb;
use serde_json::{Map, Value};

/// Key naming the entity kind in the canonical shape
pub const ENTITY_KEY: &str = "entity";
/// Key naming the verb in the canonical shape
pub const OPERATION_KEY: &str = "operation";
/// Key holding the payload in the canonical shape
pub const RESOURCE_KEY: &str = "resource";

/// Which of the two accepted input shapes an operation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationShape {
    /// Verb-keyed: `{ "create": {...} }`
    Native,
    /// Explicit: `{ "entity": ..., "operation": ..., "resource": ... }`
    Canonical,
}

/// Canonical when `entity` is a string and a `resource` key exists, even if null
pub fn classify_shape(op: &Map<String, Value>) -> OperationShape {
    let has_entity = op.get(ENTITY_KEY).is_some_and(Value::is_string);
    if has_entity && op.contains_key(RESOURCE_KEY) {
        OperationShape::Canonical
    } else {
        OperationShape::Native
    }
}

/// First native verb key present, checked create, update, remove
pub fn classify_verb(op: &Map<String, Value>) -> Option<Verb> {
    Verb::ALL
        .iter()
        .copied()
        .find(|verb| op.contains_key(verb.as_str()))
}

/// Every native verb key present, in priority order
pub fn verb_keys(op: &Map<String, Value>) -> Vec<Verb> {
    Verb::ALL
        .iter()
        .copied()
        .filter(|verb| op.contains_key(verb.as_str()))
        .collect()
}
