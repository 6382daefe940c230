//! Core types and data structures for the opnorm normalization engine
//!
//! Raw operations stay untyped `serde_json::Value`s until classification
//! succeeds; everything in this module is the typed side of that boundary.

use crate::inference::lexicon;
use crate::normalization::diagnostics::TransformationRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Closed vocabulary of entity kinds an operation can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Campaign,
    AdGroup,
    AdGroupCriterion,
    CampaignCriterion,
    Label,
    SharedSet,
    SharedCriterion,
    CampaignBudget,
    BiddingStrategy,
    AdGroupAd,
    Asset,
    ConversionAction,
    CustomerNegativeCriterion,
    CampaignLabel,
    AdGroupLabel,
    CustomerLabel,
    KeywordPlanCampaign,
    KeywordPlanAdGroup,
    KeywordPlanAdGroupKeyword,
    ExtensionFeedItem,
    CampaignExtensionSetting,
    AdGroupExtensionSetting,
    RemarketingAction,
    UserList,
}

impl EntityKind {
    /// Every entity kind, in declaration order
    pub const ALL: [EntityKind; 24] = [
        EntityKind::Campaign,
        EntityKind::AdGroup,
        EntityKind::AdGroupCriterion,
        EntityKind::CampaignCriterion,
        EntityKind::Label,
        EntityKind::SharedSet,
        EntityKind::SharedCriterion,
        EntityKind::CampaignBudget,
        EntityKind::BiddingStrategy,
        EntityKind::AdGroupAd,
        EntityKind::Asset,
        EntityKind::ConversionAction,
        EntityKind::CustomerNegativeCriterion,
        EntityKind::CampaignLabel,
        EntityKind::AdGroupLabel,
        EntityKind::CustomerLabel,
        EntityKind::KeywordPlanCampaign,
        EntityKind::KeywordPlanAdGroup,
        EntityKind::KeywordPlanAdGroupKeyword,
        EntityKind::ExtensionFeedItem,
        EntityKind::CampaignExtensionSetting,
        EntityKind::AdGroupExtensionSetting,
        EntityKind::RemarketingAction,
        EntityKind::UserList,
    ];

    /// Wire identifier, e.g. `ad_group_criterion`
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Campaign => "campaign",
            EntityKind::AdGroup => "ad_group",
            EntityKind::AdGroupCriterion => "ad_group_criterion",
            EntityKind::CampaignCriterion => "campaign_criterion",
            EntityKind::Label => "label",
            EntityKind::SharedSet => "shared_set",
            EntityKind::SharedCriterion => "shared_criterion",
            EntityKind::CampaignBudget => "campaign_budget",
            EntityKind::BiddingStrategy => "bidding_strategy",
            EntityKind::AdGroupAd => "ad_group_ad",
            EntityKind::Asset => "asset",
            EntityKind::ConversionAction => "conversion_action",
            EntityKind::CustomerNegativeCriterion => "customer_negative_criterion",
            EntityKind::CampaignLabel => "campaign_label",
            EntityKind::AdGroupLabel => "ad_group_label",
            EntityKind::CustomerLabel => "customer_label",
            EntityKind::KeywordPlanCampaign => "keyword_plan_campaign",
            EntityKind::KeywordPlanAdGroup => "keyword_plan_ad_group",
            EntityKind::KeywordPlanAdGroupKeyword => "keyword_plan_ad_group_keyword",
            EntityKind::ExtensionFeedItem => "extension_feed_item",
            EntityKind::CampaignExtensionSetting => "campaign_extension_setting",
            EntityKind::AdGroupExtensionSetting => "ad_group_extension_setting",
            EntityKind::RemarketingAction => "remarketing_action",
            EntityKind::UserList => "user_list",
        }
    }

    /// Collection segment used in resource names, e.g. `adGroupCriteria`
    pub fn path_segment(&self) -> &'static str {
        lexicon::segment_for(*self)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityKind(pub String);

impl fmt::Display for UnknownEntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity type '{}'", self.0)
    }
}

impl std::error::Error for UnknownEntityKind {}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Mutation verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Create,
    Update,
    Remove,
}

impl Verb {
    /// Native-shape keys, in classification priority order
    pub const ALL: [Verb; 3] = [Verb::Create, Verb::Update, Verb::Remove];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Remove => "remove",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .iter()
            .copied()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

/// Operation payload
///
/// Serialized untagged, so a resource always round-trips to the exact JSON
/// it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resource {
    /// A resource name such as `customers/1/labels/2`
    Identifier(String),
    /// A field mapping for create and update
    Fields(Map<String, Value>),
    /// Anything else a canonical input carried, passed through untouched
    Other(Value),
}

impl Resource {
    /// Classify a raw JSON value without going through serde
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Resource::Identifier(s),
            Value::Object(map) => Resource::Fields(map),
            other => Resource::Other(other),
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Resource::Identifier(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&Map<String, Value>> {
        match self {
            Resource::Fields(map) => Some(map),
            _ => None,
        }
    }
}

/// Human-readable JSON type name for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The normalizer's output unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOperation {
    pub entity: EntityKind,
    pub operation: Verb,
    pub resource: Resource,
}

impl CanonicalOperation {
    pub fn new(entity: EntityKind, operation: Verb, resource: Resource) -> Self {
        Self {
            entity,
            operation,
            resource,
        }
    }
}

/// Result of one normalization call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedBatch {
    /// Canonical operations, in input order
    pub operations: Vec<CanonicalOperation>,

    /// One message per input item that had to be transformed
    pub warnings: Vec<String>,

    /// Structured counterpart of `warnings`
    #[serde(skip)]
    pub records: Vec<TransformationRecord>,
}

impl NormalizedBatch {
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// True when at least one input item was not already canonical
    pub fn has_transformations(&self) -> bool {
        !self.records.is_empty()
    }
}
