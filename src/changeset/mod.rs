// Copyright (c) 2025 - Cowboy AI, Inc.
//! Change-Set Builder
//!
//! Runs a [`LabelStrategy`] over a selection and describes the result as
//! per-resource diffs. Nothing here touches the store: a [`Preview`] is a pure
//! value and [`build_apply_payload`] turns it into the exact label maps the
//! store should write.
//!
//! ```text
//! selection ──run_strategy──▶ Preview ──build_apply_payload──▶ ApplyPayload
//!                               │
//!                               └── per resource: original, candidate, [Change]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::{LabelFingerprint, LabelMap, Resource};
use crate::rules::{LabelStrategy, StrategyKind};

/// One label-level difference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Change {
    Add {
        key: String,
        value: String,
    },
    Update {
        key: String,
        old_value: String,
        new_value: String,
    },
    Delete {
        key: String,
        old_value: String,
    },
}

impl Change {
    pub fn key(&self) -> &str {
        match self {
            Self::Add { key, .. } | Self::Update { key, .. } | Self::Delete { key, .. } => key,
        }
    }
}

/// Diff two label maps
///
/// Adds and updates come first in candidate key order, then deletes in
/// original key order. Unchanged keys produce nothing.
pub fn diff_labels(original: &LabelMap, candidate: &LabelMap) -> Vec<Change> {
    let mut changes: Vec<Change> = candidate
        .iter()
        .filter_map(|(key, value)| match original.get(key) {
            None => Some(Change::Add {
                key: key.to_string(),
                value: value.to_string(),
            }),
            Some(old) if old != value => Some(Change::Update {
                key: key.to_string(),
                old_value: old.to_string(),
                new_value: value.to_string(),
            }),
            Some(_) => None,
        })
        .collect();

    changes.extend(
        original
            .iter()
            .filter(|(key, _)| !candidate.contains_key(key))
            .map(|(key, value)| Change::Delete {
                key: key.to_string(),
                old_value: value.to_string(),
            }),
    );
    changes
}

/// Preview of one resource's label change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePreview {
    pub id: String,
    pub name: String,
    pub original: LabelMap,
    pub candidate: LabelMap,
    /// Fingerprint observed when the preview was built
    pub fingerprint: LabelFingerprint,
    pub changes: Vec<Change>,
}

/// Result of running one strategy over a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub strategy: StrategyKind,
    /// Only resources with at least one change, in selection order
    pub entries: Vec<ResourcePreview>,
    /// Number of resources the strategy was evaluated against
    pub evaluated: usize,
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, id: &str) -> Option<&ResourcePreview> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Changes keyed by resource id
    pub fn changes(&self) -> BTreeMap<String, Vec<Change>> {
        self.entries
            .iter()
            .map(|entry| (entry.id.clone(), entry.changes.clone()))
            .collect()
    }

    pub fn change_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.changes.len()).sum()
    }
}

/// Evaluate a strategy over a selection
pub fn run_strategy<'a, I>(strategy: &LabelStrategy, selection: I) -> Preview
where
    I: IntoIterator<Item = &'a Resource>,
{
    let rule = strategy.rule();
    let mut evaluated = 0;
    let mut entries = Vec::new();

    for resource in selection {
        evaluated += 1;
        let Some(candidate) = rule.candidate(resource) else {
            continue;
        };
        let changes = diff_labels(resource.labels(), &candidate);
        if changes.is_empty() {
            continue;
        }
        entries.push(ResourcePreview {
            id: resource.id().to_string(),
            name: resource.name.clone(),
            original: resource.labels().clone(),
            candidate,
            fingerprint: resource.label_fingerprint().clone(),
            changes,
        });
    }

    debug!(
        strategy = %rule.kind(),
        evaluated,
        changed = entries.len(),
        "Strategy preview built"
    );

    Preview {
        strategy: rule.kind(),
        entries,
        evaluated,
    }
}

/// Complete new label maps ready for the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPayload {
    /// Resource id → complete replacement label map
    pub labels: BTreeMap<String, LabelMap>,
    /// Resource id → fingerprint seen at preview time
    pub fingerprints: BTreeMap<String, LabelFingerprint>,
}

impl ApplyPayload {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}

/// Build the store payload from a preview
pub fn build_apply_payload(preview: &Preview) -> ApplyPayload {
    let mut payload = ApplyPayload::default();
    for entry in &preview.entries {
        payload.labels.insert(entry.id.clone(), entry.candidate.clone());
        payload
            .fingerprints
            .insert(entry.id.clone(), entry.fingerprint.clone());
    }
    payload
}
