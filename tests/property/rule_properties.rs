// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Label Rules and Change Sets

use fleet_governance::changeset::{build_apply_payload, diff_labels, run_strategy, Change};
use fleet_governance::domain::Resource;
use fleet_governance::rules::{CleanupRule, LabelRule, LabelStrategy, PatternRule, PositionMapping};
use proptest::prelude::*;

use super::{fleet, labels, LABEL_KEYS};

proptest! {
    /// Removing keys from an already-cleaned resource changes nothing, and
    /// repeating a key in the rule has no effect
    #[test]
    fn prop_cleanup_is_idempotent(
        fleet in fleet(),
        keys in proptest::collection::vec(proptest::sample::select(LABEL_KEYS.to_vec()), 1..4),
    ) {
        let rule = CleanupRule::new(keys.clone());
        let doubled = CleanupRule::new(keys.iter().chain(keys.iter()).copied());

        for resource in &fleet {
            let once = rule.candidate(resource);
            prop_assert_eq!(&once, &doubled.candidate(resource));

            if let Some(cleaned) = once {
                let stripped = Resource::builder(
                    resource.id(),
                    resource.name.clone(),
                    resource.resource_type,
                    resource.created_at,
                )
                .labels(cleaned)
                .build();
                prop_assert!(rule.candidate(&stripped).is_none());
            }
        }
    }

    /// Replaying the diff over the original reproduces the candidate
    #[test]
    fn prop_diff_replays_to_candidate(original in labels(), candidate in labels()) {
        let mut replayed = original.clone();
        for change in diff_labels(&original, &candidate) {
            match change {
                Change::Add { key, value } => {
                    replayed.insert(key, value);
                }
                Change::Update { key, new_value, .. } => {
                    replayed.insert(key, new_value);
                }
                Change::Delete { key, .. } => {
                    replayed.remove(&key);
                }
            }
        }
        prop_assert_eq!(replayed, candidate);
    }

    /// Payload maps equal the preview candidates and skip unchanged resources
    #[test]
    fn prop_payload_matches_preview(fleet in fleet(), position in 0usize..4) {
        let strategy: LabelStrategy =
            PatternRule::new("-", vec![PositionMapping::new(position, "env")]).into();
        let preview = run_strategy(&strategy, &fleet);
        let payload = build_apply_payload(&preview);

        prop_assert_eq!(preview.evaluated, fleet.len());
        prop_assert_eq!(payload.len(), preview.len());
        for entry in &preview.entries {
            prop_assert!(!entry.changes.is_empty());
            prop_assert_eq!(&payload.labels[&entry.id], &entry.candidate);
        }
    }
}
