// Copyright (c) 2025 - Cowboy AI, Inc.
//! Static label assignment

use serde::{Deserialize, Serialize};

use super::{LabelRule, RuleIssue, RuleValidity, StrategyKind};
use crate::domain::{LabelError, LabelMap, LabelValidator, Resource};

/// One `key = value` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPair {
    pub key: String,
    pub value: String,
}

impl LabelPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Applies the same complete rows to every selected resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRule {
    #[serde(default)]
    pub pairs: Vec<LabelPair>,
}

impl StaticRule {
    pub fn new(pairs: Vec<LabelPair>) -> Self {
        Self { pairs }
    }

    /// The complete rows as a validated label map
    ///
    /// A key repeated across complete rows is an error here, while
    /// [`candidate`](LabelRule::candidate) lets the last row win.
    pub fn label_set(&self, validator: &dyn LabelValidator) -> Result<LabelMap, LabelError> {
        LabelMap::validated(
            self.pairs
                .iter()
                .filter(|pair| pair.is_complete())
                .map(|pair| (pair.key.as_str(), pair.value.as_str())),
            validator,
        )
    }
}

impl LabelRule for StaticRule {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Static
    }

    fn candidate(&self, resource: &Resource) -> Option<LabelMap> {
        let mut rows = self.pairs.iter().filter(|pair| pair.is_complete()).peekable();
        rows.peek()?;

        let mut labels = resource.labels().clone();
        for pair in rows {
            labels.insert(pair.key.clone(), pair.value.clone());
        }
        Some(labels)
    }

    /// Gate: at least one complete, valid row and no invalid row among those
    /// with a key
    fn validate(&self, validator: &dyn LabelValidator) -> RuleValidity {
        let mut issues = Vec::new();
        let mut usable = 0;

        for (row, pair) in self.pairs.iter().enumerate() {
            if pair.key.is_empty() {
                continue;
            }
            let key_error = validator.validate_key(&pair.key);
            let value_error = validator.validate_value(&pair.value);
            let row_ok = key_error.is_none() && value_error.is_none();

            if let Some(message) = key_error {
                issues.push(RuleIssue::at(row, message));
            }
            if let Some(message) = value_error {
                issues.push(RuleIssue::at(row, message));
            }
            if row_ok && pair.is_complete() {
                usable += 1;
            }
        }

        if usable == 0 && issues.is_empty() {
            issues.push(RuleIssue::general("at least one label with a key and value is required"));
        }
        RuleValidity { issues }
    }
}
