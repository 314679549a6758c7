// Copyright (c) 2025 - Cowboy AI, Inc.
//! Delimiter-based pattern extraction
//!
//! `prod-web-42` split on `-` gives tokens `prod`, `web`, `42`; a mapping
//! `(0, "env")` sets `env=prod`.

use serde::{Deserialize, Serialize};

use super::{merge_extracted, LabelRule, RuleIssue, RuleValidity, StrategyKind};
use crate::domain::{LabelMap, LabelValidator, Resource};

/// Token position → target label key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMapping {
    /// 0-based token index
    pub position: usize,
    pub key: String,
}

impl PositionMapping {
    pub fn new(position: usize, key: impl Into<String>) -> Self {
        Self {
            position,
            key: key.into(),
        }
    }
}

/// Splits the resource name and maps token positions to label keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub delimiter: String,
    #[serde(default)]
    pub mappings: Vec<PositionMapping>,
}

impl Default for PatternRule {
    fn default() -> Self {
        Self {
            delimiter: "-".to_string(),
            mappings: Vec::new(),
        }
    }
}

impl PatternRule {
    pub fn new(delimiter: impl Into<String>, mappings: Vec<PositionMapping>) -> Self {
        Self {
            delimiter: delimiter.into(),
            mappings,
        }
    }

    /// Tokens of `name`; an empty delimiter yields the whole name as one token
    pub fn tokens<'n>(&self, name: &'n str) -> Vec<&'n str> {
        if self.delimiter.is_empty() {
            vec![name]
        } else {
            name.split(self.delimiter.as_str()).collect()
        }
    }
}

impl LabelRule for PatternRule {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Pattern
    }

    fn candidate(&self, resource: &Resource) -> Option<LabelMap> {
        let tokens = self.tokens(&resource.name);
        let extracted = self
            .mappings
            .iter()
            .filter(|mapping| !mapping.key.is_empty())
            .filter_map(|mapping| {
                let token = tokens.get(mapping.position)?;
                Some((mapping.key.clone(), token.to_string()))
            })
            .collect();

        merge_extracted(resource, extracted)
    }

    fn validate(&self, _validator: &dyn LabelValidator) -> RuleValidity {
        if self.mappings.iter().any(|mapping| !mapping.key.is_empty()) {
            RuleValidity::valid()
        } else {
            RuleValidity::invalid(RuleIssue::general(
                "at least one position mapping needs a target key",
            ))
        }
    }
}
