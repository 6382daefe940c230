//! Operation normalizer
//!
//! Converts a batch of mutation operations, each either in the verb-keyed
//! native shape or the explicit canonical shape, into canonical operations.
//! Native items get their entity kind resolved in a fixed order:
//!
//! 1. the resource name embedded in the payload (or the remove target),
//! 2. for creates only, the payload's field shape,
//! 3. the explicit override field on the item.
//!
//! The first item that cannot be normalized aborts the whole batch.
//!
//! # Example
//!
//! ```
//! use opnorm_core::{normalize, EntityKind, Verb};
//! use serde_json::json;
//!
//! let batch = normalize(&[json!({ "remove": "customers/123/labels/789" })]).unwrap();
//! assert_eq!(batch.operations[0].entity, EntityKind::Label);
//! assert_eq!(batch.operations[0].operation, Verb::Remove);
//! assert_eq!(batch.warnings.len(), 1);
//! ```
//!
//! Copyright (c) 2025 opnorm Team
//! Licensed under the Apache-2.0 license

pub mod classifier;
pub mod diagnostics;

use crate::config::NormalizerConfig;
use crate::inference::{resource_name, shape};
use crate::types::{json_type_name, CanonicalOperation, EntityKind, NormalizedBatch, Resource, Verb};
use crate::{Error, Result};
use serde_json::{Map, Value};

pub use classifier::{classify_shape, classify_verb, OperationShape};
pub use diagnostics::{DiagnosticTracker, ResolutionSource, TransformationRecord};

/// Normalizes operation batches under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer, rejecting an invalid configuration
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a batch of raw operations
    ///
    /// Output order matches input order. Warnings are produced only for
    /// items that were not already canonical.
    ///
    /// # Errors
    ///
    /// Returns the first per-item error, tagged with the item's index. No
    /// partial output is returned.
    pub fn normalize(&self, operations: &[Value]) -> Result<NormalizedBatch> {
        let mut tracker = DiagnosticTracker::new();
        let mut normalized = Vec::with_capacity(operations.len());

        for (index, raw) in operations.iter().enumerate() {
            normalized.push(self.normalize_item(index, raw, &mut tracker)?);
        }

        if tracker.override_count() > 0 {
            log::warn!(
                "{} operation(s) relied on the '{}' override for their entity type",
                tracker.override_count(),
                self.config.override_field
            );
        }

        let (warnings, records) = tracker.finish();
        Ok(NormalizedBatch {
            operations: normalized,
            warnings,
            records,
        })
    }

    /// Parse a JSON array of operations and normalize it
    pub fn normalize_json_str(&self, input: &str) -> Result<NormalizedBatch> {
        let operations: Vec<Value> = serde_json::from_str(input)?;
        self.normalize(&operations)
    }

    fn normalize_item(
        &self,
        index: usize,
        raw: &Value,
        tracker: &mut DiagnosticTracker,
    ) -> Result<CanonicalOperation> {
        let op = raw.as_object().ok_or_else(|| Error::MalformedOperation {
            index,
            message: format!("expected an object, found {}", json_type_name(raw)),
        })?;

        match classify_shape(op) {
            OperationShape::Canonical => self.pass_through(index, op),
            OperationShape::Native => self.convert_native(index, op, tracker),
        }
    }

    /// Validate an already-canonical item and copy it through
    ///
    /// `entity` and `operation` must name known kinds and verbs. An item
    /// with `entity` and `resource` but no `operation` key is still routed
    /// here and rejected as malformed rather than treated as native.
    fn pass_through(&self, index: usize, op: &Map<String, Value>) -> Result<CanonicalOperation> {
        let entity_name = op
            .get(classifier::ENTITY_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default();
        let entity = parse_entity(index, entity_name)?;

        let verb = match op.get(classifier::OPERATION_KEY) {
            Some(Value::String(name)) => name
                .parse::<Verb>()
                .map_err(|message| Error::MalformedOperation { index, message })?,
            Some(other) => {
                return Err(Error::MalformedOperation {
                    index,
                    message: format!("'operation' must be a string, found {}", json_type_name(other)),
                })
            }
            None => {
                return Err(Error::MalformedOperation {
                    index,
                    message: "canonical operation is missing 'operation'".to_string(),
                })
            }
        };

        let resource = op.get(classifier::RESOURCE_KEY).cloned().unwrap_or(Value::Null);
        let resource = match (verb, resource) {
            (Verb::Remove, Value::Object(fields)) => self.repair_remove_payload(index, fields),
            (_, value) => Resource::from_value(value),
        };

        Ok(CanonicalOperation::new(entity, verb, resource))
    }

    /// Some producers send the whole resource instead of its name on remove
    ///
    /// A null or empty-string identifier counts as absent and the mapping is kept.
    fn repair_remove_payload(&self, index: usize, fields: Map<String, Value>) -> Resource {
        let identifier = fields
            .get(&self.config.identifier_field)
            .filter(|value| !value.is_null() && value.as_str() != Some(""))
            .cloned();

        match identifier {
            Some(identifier) => {
                log::debug!(
                    "operation {}: remove payload was an object, using its '{}'",
                    index,
                    self.config.identifier_field
                );
                Resource::from_value(identifier)
            }
            None => Resource::Fields(fields),
        }
    }

    fn convert_native(
        &self,
        index: usize,
        op: &Map<String, Value>,
        tracker: &mut DiagnosticTracker,
    ) -> Result<CanonicalOperation> {
        let verb = match classifier::verb_keys(op).as_slice() {
            [] => {
                return Err(Error::MalformedOperation {
                    index,
                    message: "expected one of 'create', 'update' or 'remove', or the canonical \
                              {entity, operation, resource} format"
                        .to_string(),
                })
            }
            [verb] => *verb,
            many => {
                let keys: Vec<&str> = many.iter().map(Verb::as_str).collect();
                return Err(Error::MalformedOperation {
                    index,
                    message: format!("multiple operation keys present: {}", keys.join(", ")),
                });
            }
        };
        // verb_keys only reports keys that exist
        let payload = op.get(verb.as_str()).unwrap_or(&Value::Null);

        let (entity, source, resource, identifier_stripped) = match verb {
            Verb::Remove => {
                let name = payload.as_str().ok_or_else(|| Error::InvalidPayload {
                    index,
                    verb,
                    expected: "a resource name string".to_string(),
                    found: json_type_name(payload).to_string(),
                })?;
                let (entity, source) = match resource_name::infer_from_resource_name(name) {
                    Some(kind) => (kind, ResolutionSource::ResourceName),
                    None => (self.resolve_override(index, verb, op)?, ResolutionSource::Override),
                };
                (entity, source, Resource::Identifier(name.to_string()), false)
            }
            Verb::Create | Verb::Update => {
                let fields = payload.as_object().ok_or_else(|| Error::InvalidPayload {
                    index,
                    verb,
                    expected: "an object of resource fields".to_string(),
                    found: json_type_name(payload).to_string(),
                })?;
                let (entity, source) = match self.infer_entity(verb, fields) {
                    Some(resolved) => resolved,
                    None => (self.resolve_override(index, verb, op)?, ResolutionSource::Override),
                };

                let mut fields = fields.clone();
                let identifier_stripped = verb == Verb::Create
                    && !self.config.is_identifier_exempt(entity)
                    && fields.remove(&self.config.identifier_field).is_some();

                (entity, source, Resource::Fields(fields), identifier_stripped)
            }
        };

        tracker.record(TransformationRecord {
            index,
            verb,
            entity,
            source,
            identifier_stripped,
        });

        Ok(CanonicalOperation::new(entity, verb, resource))
    }

    fn infer_entity(
        &self,
        verb: Verb,
        fields: &Map<String, Value>,
    ) -> Option<(EntityKind, ResolutionSource)> {
        let from_name = resource_name::infer_from_value(fields.get(&self.config.identifier_field))
            .map(|kind| (kind, ResolutionSource::ResourceName));
        if from_name.is_some() || verb != Verb::Create {
            return from_name;
        }
        shape::infer_from_shape(fields).map(|kind| (kind, ResolutionSource::Shape))
    }

    fn resolve_override(
        &self,
        index: usize,
        verb: Verb,
        op: &Map<String, Value>,
    ) -> Result<EntityKind> {
        match op.get(&self.config.override_field) {
            Some(Value::String(name)) => parse_entity(index, name),
            _ => Err(Error::UnresolvedEntity { index, verb }),
        }
    }
}

fn parse_entity(index: usize, name: &str) -> Result<EntityKind> {
    name.parse::<EntityKind>()
        .map_err(|unknown| Error::UnknownEntityKind {
            index,
            value: unknown.0,
        })
}

/// Normalize a batch with the default configuration
pub fn normalize(operations: &[Value]) -> Result<NormalizedBatch> {
    Normalizer::default().normalize(operations)
}
