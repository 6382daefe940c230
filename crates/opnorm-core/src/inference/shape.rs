//! Shape-based entity inference
//!
//! Create payloads carry no type tag and usually no resource name, so the
//! entity kind has to be reconstructed from which fields are present. Field
//! signatures overlap between kinds; the rules below are evaluated in order
//! and the first match wins. Reordering them changes results.
//!
//! Copyright (c) 2025 opnorm Team
//! Licensed under the Apache-2.0 license

use crate::types::EntityKind;
use serde_json::{Map, Value};
use std::fmt;

/// Predicate over a payload's field set
pub type ShapePredicate = fn(&Map<String, Value>) -> bool;

/// One entry of the ordered rule table
#[derive(Clone, Copy)]
pub struct ShapeRule {
    /// Stable identifier, reported in diagnostics
    pub id: &'static str,
    pub matches: ShapePredicate,
    pub kind: EntityKind,
}

impl fmt::Debug for ShapeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeRule")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

fn has(fields: &Map<String, Value>, key: &str) -> bool {
    fields.contains_key(key)
}

fn has_criterion_body(fields: &Map<String, Value>) -> bool {
    has(fields, "keyword") || has(fields, "negative")
}

/// Ordered rule table. Precedence is part of the contract.
pub const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        id: "ad_group_criterion",
        matches: |f| {
            has(f, "ad_group") && (has_criterion_body(f) || has(f, "placement"))
        },
        kind: EntityKind::AdGroupCriterion,
    },
    // a campaign payload may carry keyword-shaped sub-fields; the channel type rules it out
    ShapeRule {
        id: "campaign_criterion",
        matches: |f| {
            has(f, "campaign") && has_criterion_body(f) && !has(f, "advertising_channel_type")
        },
        kind: EntityKind::CampaignCriterion,
    },
    ShapeRule {
        id: "shared_criterion",
        matches: |f| has(f, "shared_set"),
        kind: EntityKind::SharedCriterion,
    },
    ShapeRule {
        id: "label",
        matches: |f| has(f, "name") && has(f, "text_label"),
        kind: EntityKind::Label,
    },
    ShapeRule {
        id: "ad_group",
        matches: |f| has(f, "campaign") && has(f, "name") && !has_criterion_body(f),
        kind: EntityKind::AdGroup,
    },
    ShapeRule {
        id: "campaign",
        matches: |f| has(f, "advertising_channel_type"),
        kind: EntityKind::Campaign,
    },
    // bidding strategies also carry amount_micros
    ShapeRule {
        id: "campaign_budget",
        matches: |f| has(f, "amount_micros") && !has(f, "cpc_bid_micros"),
        kind: EntityKind::CampaignBudget,
    },
    ShapeRule {
        id: "asset",
        matches: |f| f.keys().any(|key| key.ends_with("_asset")),
        kind: EntityKind::Asset,
    },
    ShapeRule {
        id: "conversion_action",
        matches: |f| has(f, "type") && has(f, "category"),
        kind: EntityKind::ConversionAction,
    },
];

/// Return the first rule matching the field set
pub fn matching_rule(fields: &Map<String, Value>) -> Option<&'static ShapeRule> {
    SHAPE_RULES.iter().find(|rule| (rule.matches)(fields))
}

/// Infer an entity kind from a payload's field shape
pub fn infer_from_shape(fields: &Map<String, Value>) -> Option<EntityKind> {
    matching_rule(fields).map(|rule| rule.kind)
}

/// Same as [`infer_from_shape`] for an arbitrary JSON value; non-objects infer nothing
pub fn infer_from_value(value: Option<&Value>) -> Option<EntityKind> {
    value.and_then(Value::as_object).and_then(infer_from_shape)
}
