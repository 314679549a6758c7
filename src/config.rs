// Copyright (c) 2025 - Cowboy AI, Inc.
//! Engine configuration
//!
//! Defaults for the view stage and the actor recorded in label history.
//! Loaded from environment variables or a JSON document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{SortDirection, SortKey};

/// Configuration loading error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Malformed configuration document: {0}")]
    Malformed(String),
}

/// Governance engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceConfig {
    /// Rows per page in the view stage
    pub page_size: usize,

    /// Sort key applied when a filter config does not name one
    pub default_sort_key: Option<SortKey>,

    /// Sort direction applied with the default sort key
    pub default_sort_direction: SortDirection,

    /// Actor recorded in label history for bulk applies
    pub default_actor: String,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            default_sort_key: Some(SortKey::Name),
            default_sort_direction: SortDirection::Asc,
            default_actor: "governance-engine".to_string(),
        }
    }
}

impl GovernanceConfig {
    pub const DEFAULT_PAGE_SIZE: usize = 25;

    /// Load configuration from environment variables
    ///
    /// - `FLEET_PAGE_SIZE` positive integer
    /// - `FLEET_SORT_KEY` sort key name (e.g. `name`, `createdAt`)
    /// - `FLEET_SORT_DIRECTION` `asc` or `desc`
    /// - `FLEET_ACTOR` actor name
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("FLEET_PAGE_SIZE") {
            config.page_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "FLEET_PAGE_SIZE",
                        value: raw,
                    })
                }
            };
        }

        if let Some(raw) = lookup("FLEET_SORT_KEY") {
            config.default_sort_key = match SortKey::parse(raw.trim()) {
                SortKey::Unknown => {
                    return Err(ConfigError::InvalidValue {
                        name: "FLEET_SORT_KEY",
                        value: raw,
                    })
                }
                key => Some(key),
            };
        }

        if let Some(raw) = lookup("FLEET_SORT_DIRECTION") {
            config.default_sort_direction =
                SortDirection::parse(raw.trim()).ok_or(ConfigError::InvalidValue {
                    name: "FLEET_SORT_DIRECTION",
                    value: raw.clone(),
                })?;
        }

        if let Some(actor) = lookup("FLEET_ACTOR") {
            if !actor.trim().is_empty() {
                config.default_actor = actor;
            }
        }

        Ok(config)
    }

    /// Parse configuration from a JSON document
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        if config.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "pageSize",
                value: "0".to_string(),
            });
        }
        Ok(config)
    }
}
