// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw advisory output parsing
//!
//! Advisory services answer in free text that usually, but not always,
//! contains one JSON object. Parsing degrades gracefully: unknown modes are
//! dropped, incomplete mappings are skipped, a reply without any JSON becomes
//! plain advice text.

use serde::Deserialize;

use super::{NameAnalysis, SuggestedConfig};
use crate::rules::{GroupMapping, PositionMapping, StrategyKind};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    #[serde(default)]
    advice: Option<String>,
    #[serde(default)]
    suggested_mode: Option<String>,
    #[serde(default)]
    config: Option<RawConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    delimiter: Option<String>,
    #[serde(default)]
    mappings: Vec<RawMapping>,
    #[serde(default)]
    regex: Option<String>,
    #[serde(default)]
    groups: Vec<RawMapping>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMapping {
    #[serde(default, alias = "groupIndex", alias = "index")]
    position: Option<usize>,
    #[serde(default)]
    key: Option<String>,
}

impl RawMapping {
    fn into_pair(self) -> Option<(usize, String)> {
        let key = self.key.filter(|key| !key.trim().is_empty())?;
        Some((self.position?, key))
    }
}

/// Parse raw advisory output into a [`NameAnalysis`]
///
/// Text with no parseable JSON object is kept verbatim as the advice.
pub fn parse_analysis(raw: &str) -> NameAnalysis {
    let parsed = extract_json_object(raw)
        .and_then(|json| serde_json::from_str::<RawAnalysis>(json).ok());

    let Some(parsed) = parsed else {
        return NameAnalysis {
            advice: raw.trim().to_string(),
            suggested_mode: None,
            config: None,
        };
    };

    NameAnalysis {
        advice: parsed.advice.unwrap_or_default().trim().to_string(),
        suggested_mode: parsed.suggested_mode.as_deref().and_then(StrategyKind::parse),
        config: parsed.config.map(convert_config),
    }
}

fn convert_config(raw: RawConfig) -> SuggestedConfig {
    SuggestedConfig {
        delimiter: raw.delimiter,
        mappings: raw
            .mappings
            .into_iter()
            .filter_map(RawMapping::into_pair)
            .map(|(position, key)| PositionMapping::new(position, key))
            .collect(),
        regex: raw.regex.filter(|regex| !regex.is_empty()),
        groups: raw
            .groups
            .into_iter()
            .filter_map(RawMapping::into_pair)
            .map(|(index, key)| GroupMapping::new(index, key))
            .collect(),
    }
}

/// Outermost `{ ... }` span of the raw text
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}
