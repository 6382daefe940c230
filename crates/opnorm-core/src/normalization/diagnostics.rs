//! Diagnostic trail for shape transformations
//!
//! Only native-shape items produce a record. Canonical input, including the
//! repaired remove payloads, passes through silently.

use crate::types::{EntityKind, Verb};
use serde::{Deserialize, Serialize};

/// Which stage resolved an item's entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Parsed from a resource name
    ResourceName,
    /// Inferred from the payload's field shape
    Shape,
    /// Taken from the explicit override field
    Override,
}

/// Record of a single native-to-canonical conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationRecord {
    /// Position of the item in the input batch
    pub index: usize,
    pub verb: Verb,
    pub entity: EntityKind,
    pub source: ResolutionSource,
    /// Whether the identifier field was removed from a create payload
    pub identifier_stripped: bool,
}

impl TransformationRecord {
    /// Render as the warning string handed back to callers
    pub fn to_warning(&self) -> String {
        let mut message = format!(
            "Operation {}: converted native {} to canonical format (entity: {})",
            self.index, self.verb, self.entity
        );
        if self.identifier_stripped {
            message.push_str("; removed resource identifier from create payload");
        }
        message
    }
}

/// Collects transformation records during one normalization call
#[derive(Debug, Default)]
pub struct DiagnosticTracker {
    records: Vec<TransformationRecord>,
}

impl DiagnosticTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: TransformationRecord) {
        log::debug!("{}", record.to_warning());
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records resolved through the override field
    pub fn override_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.source == ResolutionSource::Override)
            .count()
    }

    /// Consume the tracker into `(warnings, records)`
    pub fn finish(self) -> (Vec<String>, Vec<TransformationRecord>) {
        let warnings = self.records.iter().map(TransformationRecord::to_warning).collect();
        (warnings, self.records)
    }
}
