// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud label syntax validator
//!
//! Keys: 1 to 63 characters, start with a lowercase letter, then lowercase
//! letters, digits, `_` or `-`. Values: at most 63 characters of the same
//! class; empty values are allowed.

use crate::domain::LabelValidator;

/// Validator enforcing cloud provider label syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudLabelValidator {
    max_length: usize,
}

impl CloudLabelValidator {
    /// Provider limit on key and value length
    pub const MAX_LENGTH: usize = 63;

    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    fn is_allowed(ch: char) -> bool {
        ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-'
    }

    fn check_characters(input: &str) -> Option<String> {
        input
            .chars()
            .find(|ch| !Self::is_allowed(*ch))
            .map(|ch| format!("character {:?} is not allowed", ch))
    }
}

impl Default for CloudLabelValidator {
    fn default() -> Self {
        Self::with_max_length(Self::MAX_LENGTH)
    }
}

impl LabelValidator for CloudLabelValidator {
    fn validate_key(&self, key: &str) -> Option<String> {
        let Some(first) = key.chars().next() else {
            return Some("key must not be empty".to_string());
        };
        if key.chars().count() > self.max_length {
            return Some(format!("key exceeds {} characters", self.max_length));
        }
        if !first.is_ascii_lowercase() {
            return Some("key must start with a lowercase letter".to_string());
        }
        Self::check_characters(key)
    }

    fn validate_value(&self, value: &str) -> Option<String> {
        if value.chars().count() > self.max_length {
            return Some(format!("value exceeds {} characters", self.max_length));
        }
        Self::check_characters(value)
    }
}
