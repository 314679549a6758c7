// Copyright (c) 2025 - Cowboy AI, Inc.
//! Label Rule Strategies
//!
//! Four ways of deriving a candidate label map from a resource:
//!
//! | Strategy  | Parameters                          | Effect                     |
//! |-----------|-------------------------------------|----------------------------|
//! | Static    | `(key, value)` rows                 | same labels on every target |
//! | Pattern   | delimiter + `(position, key)`       | name tokens become values  |
//! | Regex     | expression + `(group, key)`         | capture groups become values |
//! | Cleanup   | keys                                | listed keys are removed    |
//!
//! Every strategy implements [`LabelRule`]; [`LabelStrategy`] is the closed
//! variant callers pass around, dispatched once through [`LabelStrategy::rule`].
//!
//! # Misses
//!
//! A strategy that has nothing to say about a resource returns `None`.
//! Out-of-range positions and non-participating groups are skipped silently;
//! partial applicability across a mixed selection is normal.

pub mod cleanup;
pub mod pattern;
pub mod regex_rule;
pub mod static_rule;

pub use cleanup::CleanupRule;
pub use pattern::{PatternRule, PositionMapping};
pub use regex_rule::{GroupMapping, RegexRule};
pub use static_rule::{LabelPair, StaticRule};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{LabelMap, LabelValidator, Resource};

/// Which strategy a rule is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Static,
    Pattern,
    Regex,
    Cleanup,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Pattern => "pattern",
            Self::Regex => "regex",
            Self::Cleanup => "cleanup",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "pattern" | "delimiter" => Some(Self::Pattern),
            "regex" | "regexp" => Some(Self::Regex),
            "cleanup" | "remove" => Some(Self::Cleanup),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found while validating strategy parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleIssue {
    /// Parameter row the issue refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub message: String,
}

impl RuleIssue {
    pub fn at(row: usize, message: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            row: None,
            message: message.into(),
        }
    }
}

/// Result of the validity gate
///
/// An invalid strategy can still be previewed; it must not be applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleValidity {
    pub issues: Vec<RuleIssue>,
}

impl RuleValidity {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(issue: RuleIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues joined into one message
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|issue| match issue.row {
                Some(row) => format!("row {}: {}", row, issue.message),
                None => issue.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A label derivation rule
pub trait LabelRule {
    fn kind(&self) -> StrategyKind;

    /// Candidate label map for `resource`, or `None` for no change
    ///
    /// The candidate is the complete new label map, not a delta.
    fn candidate(&self, resource: &Resource) -> Option<LabelMap>;

    /// Check whether these parameters may be applied
    fn validate(&self, validator: &dyn LabelValidator) -> RuleValidity;
}

/// Closed set of label strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LabelStrategy {
    Static(StaticRule),
    Pattern(PatternRule),
    Regex(RegexRule),
    Cleanup(CleanupRule),
}

impl LabelStrategy {
    pub fn rule(&self) -> &dyn LabelRule {
        match self {
            Self::Static(rule) => rule,
            Self::Pattern(rule) => rule,
            Self::Regex(rule) => rule,
            Self::Cleanup(rule) => rule,
        }
    }

    pub fn kind(&self) -> StrategyKind {
        self.rule().kind()
    }

    pub fn candidate(&self, resource: &Resource) -> Option<LabelMap> {
        self.rule().candidate(resource)
    }

    pub fn validate(&self, validator: &dyn LabelValidator) -> RuleValidity {
        self.rule().validate(validator)
    }
}

impl From<StaticRule> for LabelStrategy {
    fn from(rule: StaticRule) -> Self {
        Self::Static(rule)
    }
}

impl From<PatternRule> for LabelStrategy {
    fn from(rule: PatternRule) -> Self {
        Self::Pattern(rule)
    }
}

impl From<RegexRule> for LabelStrategy {
    fn from(rule: RegexRule) -> Self {
        Self::Regex(rule)
    }
}

impl From<CleanupRule> for LabelStrategy {
    fn from(rule: CleanupRule) -> Self {
        Self::Cleanup(rule)
    }
}

/// Merge extracted labels over the resource's current ones
///
/// Returns `None` when nothing was extracted.
pub(crate) fn merge_extracted(resource: &Resource, extracted: Vec<(String, String)>) -> Option<LabelMap> {
    if extracted.is_empty() {
        return None;
    }
    let mut labels = resource.labels().clone();
    for (key, value) in extracted {
        labels.insert(key, value);
    }
    Some(labels)
}
