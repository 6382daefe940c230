//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating resource names
//! and payloads, plus the properties that only need crate-internal access.

#![cfg(test)]

use crate::inference::{lexicon, resource_name, shape};
use crate::types::EntityKind;
use proptest::prelude::*;
use proptest::sample::select;
use serde_json::{Map, Value};

/// Strategy for generating entity kinds
pub fn entity_kind_strategy() -> impl Strategy<Value = EntityKind> {
    select(EntityKind::ALL.to_vec())
}

/// Strategy for generating ids, including temporary negative ones
pub fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u64..10_000_000_000).prop_map(|id| id.to_string()),
        (1i64..100).prop_map(|id| (-id).to_string()),
        ((1u64..100_000), (1u64..100_000)).prop_map(|(a, b)| format!("{}~{}", a, b)),
    ]
}

/// Strategy for generating a well-formed resource name for a known kind
pub fn resource_name_strategy() -> impl Strategy<Value = (EntityKind, String)> {
    (entity_kind_strategy(), id_strategy(), id_strategy()).prop_map(|(kind, customer, local)| {
        let name = format!("customers/{}/{}/{}", customer, kind.path_segment(), local);
        (kind, name)
    })
}

/// Strategy for collection segments that are not in the lexicon
pub fn unknown_segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z]{0,20}".prop_filter("segment must be unknown", |s| lexicon::lookup(s).is_none())
}

/// Strategy for field names that no shape rule keys on
pub fn neutral_field_strategy() -> impl Strategy<Value = String> {
    "x_[a-z]{1,12}".prop_filter("must not look like an asset field", |s| !s.ends_with("_asset"))
}

/// Strategy for payloads made only of neutral fields
pub fn neutral_fields_strategy() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(neutral_field_strategy(), "[a-zA-Z0-9 ]{0,20}", 0..6).prop_map(
        |fields| {
            fields
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect()
        },
    )
}

mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_known_resource_names_resolve((kind, name) in resource_name_strategy()) {
            prop_assert_eq!(resource_name::infer_from_resource_name(&name), Some(kind));
        }

        #[test]
        fn prop_unknown_segments_resolve_to_none(
            customer in id_strategy(),
            segment in unknown_segment_strategy(),
            local in id_strategy(),
        ) {
            let name = format!("customers/{}/{}/{}", customer, segment, local);
            prop_assert_eq!(resource_name::infer_from_resource_name(&name), None);
        }

        #[test]
        fn prop_wrong_root_resolves_to_none(
            root in "[a-z]{1,10}".prop_filter("not customers", |r| r != "customers"),
            (kind, _) in resource_name_strategy(),
        ) {
            let name = format!("{}/1/{}/2", root, kind.path_segment());
            prop_assert_eq!(resource_name::infer_from_resource_name(&name), None);
        }

        #[test]
        fn prop_neutral_payloads_match_no_rule(fields in neutral_fields_strategy()) {
            prop_assert!(shape::matching_rule(&fields).is_none());
        }

        #[test]
        fn prop_ad_group_key_with_keyword_always_wins(
            mut fields in neutral_fields_strategy(),
            extra_campaign in any::<bool>(),
            extra_channel in any::<bool>(),
        ) {
            fields.insert("ad_group".to_string(), Value::String("customers/1/adGroups/2".to_string()));
            fields.insert("keyword".to_string(), serde_json::json!({"text": "x"}));
            if extra_campaign {
                fields.insert("campaign".to_string(), Value::String("customers/1/campaigns/3".to_string()));
            }
            if extra_channel {
                fields.insert("advertising_channel_type".to_string(), Value::String("SEARCH".to_string()));
            }
            prop_assert_eq!(shape::infer_from_shape(&fields), Some(EntityKind::AdGroupCriterion));
        }
    }
}
