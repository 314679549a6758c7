// Copyright (c) 2025 - Cowboy AI, Inc.
//! Label cleanup

use serde::{Deserialize, Serialize};

use super::{LabelRule, RuleIssue, RuleValidity, StrategyKind};
use crate::domain::{LabelMap, LabelValidator, Resource};

/// Removes the listed keys wherever they are present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupRule {
    #[serde(default)]
    pub keys: Vec<String>,
}

impl CleanupRule {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl LabelRule for CleanupRule {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Cleanup
    }

    fn candidate(&self, resource: &Resource) -> Option<LabelMap> {
        let mut labels = resource.labels().clone();
        let mut removed = false;
        for key in self.keys.iter().filter(|key| !key.is_empty()) {
            removed |= labels.remove(key).is_some();
        }
        removed.then_some(labels)
    }

    fn validate(&self, _validator: &dyn LabelValidator) -> RuleValidity {
        if self.keys.iter().any(|key| !key.is_empty()) {
            RuleValidity::valid()
        } else {
            RuleValidity::invalid(RuleIssue::general("at least one key to remove is required"))
        }
    }
}
