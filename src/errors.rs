// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for governance operations
//!
//! Nothing in the filtering or rule core returns an error; misses degrade to
//! "no change". These types cover the boundaries: validated construction,
//! the resource store, the advisory service and configuration loading.

use thiserror::Error;

use crate::advisory::AdvisoryError;
use crate::config::ConfigError;
use crate::domain::LabelError;
use crate::store::StoreError;

/// Errors that can occur in governance operations
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// Label map failed validated construction
    #[error("Label error: {0}")]
    Label(#[from] LabelError),

    /// Strategy parameters did not pass the validity gate
    #[error("Strategy is not applicable: {0}")]
    InvalidStrategy(String),

    /// Resource store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Advisory service error
    #[error("Advisory error: {0}")]
    Advisory(#[from] AdvisoryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;

impl From<serde_json::Error> for GovernanceError {
    fn from(err: serde_json::Error) -> Self {
        GovernanceError::Serialization(err.to_string())
    }
}
