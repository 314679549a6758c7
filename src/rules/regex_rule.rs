// Copyright (c) 2025 - Cowboy AI, Inc.
//! Regex capture-group extraction
//!
//! The expression is compiled once when the rule is built. An expression that
//! does not compile disables the rule: every resource gets no change and the
//! validity gate reports the compile error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{merge_extracted, LabelRule, RuleIssue, RuleValidity, StrategyKind};
use crate::domain::{LabelMap, LabelValidator, Resource};

/// Capture group index → target label key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMapping {
    /// Capture group index; 0 is the whole match
    pub group_index: usize,
    pub key: String,
}

impl GroupMapping {
    pub fn new(group_index: usize, key: impl Into<String>) -> Self {
        Self {
            group_index,
            key: key.into(),
        }
    }
}

/// Serialized parameters of a [`RegexRule`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexRuleParams {
    pub pattern: String,
    #[serde(default)]
    pub mappings: Vec<GroupMapping>,
}

/// Matches the resource name and maps capture groups to label keys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RegexRuleParams", into = "RegexRuleParams")]
pub struct RegexRule {
    params: RegexRuleParams,
    compiled: Result<Regex, String>,
}

impl RegexRule {
    pub fn new(pattern: impl Into<String>, mappings: Vec<GroupMapping>) -> Self {
        Self::from(RegexRuleParams {
            pattern: pattern.into(),
            mappings,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.params.pattern
    }

    pub fn mappings(&self) -> &[GroupMapping] {
        &self.params.mappings
    }

    /// Compile error, if the expression is invalid
    pub fn compile_error(&self) -> Option<&str> {
        self.compiled.as_ref().err().map(String::as_str)
    }
}

impl From<RegexRuleParams> for RegexRule {
    fn from(params: RegexRuleParams) -> Self {
        let compiled = Regex::new(&params.pattern).map_err(|e| {
            warn!(pattern = %params.pattern, "Regex rule disabled: {}", e);
            e.to_string()
        });
        Self { params, compiled }
    }
}

impl From<RegexRule> for RegexRuleParams {
    fn from(rule: RegexRule) -> Self {
        rule.params
    }
}

impl PartialEq for RegexRule {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl LabelRule for RegexRule {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Regex
    }

    fn candidate(&self, resource: &Resource) -> Option<LabelMap> {
        let regex = self.compiled.as_ref().ok()?;
        let captures = regex.captures(&resource.name)?;

        let extracted = self
            .params
            .mappings
            .iter()
            .filter(|mapping| !mapping.key.is_empty())
            .filter_map(|mapping| {
                let group = captures.get(mapping.group_index)?;
                Some((mapping.key.clone(), group.as_str().to_string()))
            })
            .collect();

        merge_extracted(resource, extracted)
    }

    fn validate(&self, _validator: &dyn LabelValidator) -> RuleValidity {
        let mut issues = Vec::new();
        if let Some(error) = self.compile_error() {
            issues.push(RuleIssue::general(format!("invalid regular expression: {}", error)));
        }
        if !self.params.mappings.iter().any(|mapping| !mapping.key.is_empty()) {
            issues.push(RuleIssue::general("at least one group mapping needs a target key"));
        }
        RuleValidity { issues }
    }
}
