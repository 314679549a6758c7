// Copyright (c) 2025 - Cowboy AI, Inc.
//! Advisory Integration
//!
//! An advisory service looks at resource names and proposes a strategy. Its
//! output is never applied directly: it only pre-fills strategy parameters
//! that the caller reviews, previews and gates like any other.
//!
//! Failures never block. [`request_advice`] turns every error into an
//! [`Advice`] carrying a readable message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::rules::{
    GroupMapping, LabelStrategy, PatternRule, PositionMapping, RegexRule, StrategyKind,
};

pub mod parse;

pub use parse::parse_analysis;

/// Advisory service errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    /// Service could not be reached or refused the request
    #[error("Advisory service unavailable: {0}")]
    Unavailable(String),

    /// Service answered with something unusable
    #[error("Malformed advisory response: {0}")]
    Malformed(String),
}

/// Suggested strategy parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<PositionMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupMapping>,
}

/// What the advisory service said about a set of names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAnalysis {
    pub advice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_mode: Option<StrategyKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SuggestedConfig>,
}

/// Opaque naming-convention analyst
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    async fn analyze_names(&self, names: &[String]) -> Result<NameAnalysis, AdvisoryError>;
}

/// Advisory result as shown to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<NameAnalysis>,
    pub failed: bool,
}

impl Advice {
    pub fn from_analysis(analysis: NameAnalysis) -> Self {
        Self {
            message: analysis.advice.clone(),
            analysis: Some(analysis),
            failed: false,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            analysis: None,
            failed: true,
        }
    }

    /// Strategy pre-filled from the analysis, if it suggested a usable one
    pub fn strategy(&self) -> Option<LabelStrategy> {
        self.analysis.as_ref().and_then(prefill_strategy)
    }
}

/// Ask the service about `names`, never failing
pub async fn request_advice(service: &dyn AdvisoryService, names: &[String]) -> Advice {
    if names.is_empty() {
        return Advice::failed("Select at least one resource to analyze");
    }

    match service.analyze_names(names).await {
        Ok(analysis) => {
            debug!(
                names = names.len(),
                suggested_mode = ?analysis.suggested_mode,
                "Advisory analysis received"
            );
            Advice::from_analysis(analysis)
        }
        Err(e) => {
            warn!("Advisory request failed: {}", e);
            Advice::failed(format!("Suggestion unavailable: {}", e))
        }
    }
}

/// Turn an analysis into strategy parameters
///
/// Only pattern and regex suggestions carry enough to pre-fill. A suggestion
/// without usable mappings yields `None`.
pub fn prefill_strategy(analysis: &NameAnalysis) -> Option<LabelStrategy> {
    let config = analysis.config.as_ref()?;
    match analysis.suggested_mode? {
        StrategyKind::Pattern if !config.mappings.is_empty() => Some(
            PatternRule::new(
                config.delimiter.clone().unwrap_or_else(|| "-".to_string()),
                config.mappings.clone(),
            )
            .into(),
        ),
        StrategyKind::Regex if !config.groups.is_empty() => {
            let regex = config.regex.as_ref()?;
            Some(RegexRule::new(regex.clone(), config.groups.clone()).into())
        }
        _ => None,
    }
}
