// Copyright (c) 2025 - Cowboy AI, Inc.
//! Label Map Value Object
//!
//! Labels are flat string-to-string mappings. [`LabelMap`] keeps keys unique
//! and iterates in key order, so every diff and every facet derived from it is
//! deterministic. Syntax rules for keys and values are owned by a
//! [`LabelValidator`] collaborator; this module only enforces the structure.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Label construction error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Invalid label key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid value for label {key:?}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Duplicate label key: {0}")]
    DuplicateKey(String),
}

/// Key/value syntax validator
///
/// Returns `None` when the input is acceptable and a human-readable message
/// otherwise.
pub trait LabelValidator: Send + Sync {
    fn validate_key(&self, key: &str) -> Option<String>;

    fn validate_value(&self, value: &str) -> Option<String>;
}

/// Mapping from label key to label value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap(BTreeMap<String, String>);

impl LabelMap {
    /// Create an empty label map
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a label map, checking every pair against `validator`
    ///
    /// # Invariants
    /// - Keys are unique (a repeated key is an error, not an overwrite)
    /// - Every key and value passes the validator
    pub fn validated<I, K, V>(pairs: I, validator: &dyn LabelValidator) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();

            if let Some(reason) = validator.validate_key(&key) {
                return Err(LabelError::InvalidKey { key, reason });
            }
            if let Some(reason) = validator.validate_value(&value) {
                return Err(LabelError::InvalidValue { key, reason });
            }
            if map.contains_key(&key) {
                return Err(LabelError::DuplicateKey(key));
            }
            map.insert(key, value);
        }
        Ok(Self(map))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Check for a label with exactly this value
    pub fn has_label(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// Set a label, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<BTreeMap<String, String>> for LabelMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for LabelMap {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for LabelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}
