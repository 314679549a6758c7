// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Store Abstraction
//!
//! The store is the authoritative owner of resources and their label state.
//! The governance core never writes to it; it only hands over an
//! [`ApplyPayload`] built from a preview.
//!
//! # Architecture
//!
//! ```text
//! list() ──▶ pure core (filter, facets, rules) ──▶ ApplyPayload
//!                                                      │
//!                             apply_label_updates() ◀──┘
//! ```
//!
//! # Store Requirements
//!
//! 1. **Atomic per resource**: a resource's labels are replaced whole or not at all
//! 2. **Append-only history**: every write appends a history entry
//! 3. **Optimistic concurrency**: a stale fingerprint is a conflict, not an overwrite
//! 4. **No retry**: conflicts are reported back, never retried by the store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::changeset::ApplyPayload;
use crate::domain::Resource;

pub mod memory;

pub use memory::InMemoryResourceStore;

/// Errors raised by a resource store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Resource id not present in the store
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Resource has no recorded history to restore
    #[error("Resource {0} has no prior label snapshot")]
    NothingToRevert(String),

    /// Two resources share an id
    #[error("Duplicate resource id: {0}")]
    DuplicateId(String),

    /// Store could not be initialised
    #[error("Store configuration error: {0}")]
    Configuration(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Who is writing and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyContext {
    pub actor: String,
    pub timestamp: DateTime<Utc>,
}

impl ApplyContext {
    pub fn new(actor: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            actor: actor.into(),
            timestamp,
        }
    }
}

/// Per-resource result of an apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOutcome {
    /// Ids whose labels were replaced
    pub applied: Vec<String>,
    /// Ids skipped because their fingerprint changed since the preview
    pub conflicts: Vec<String>,
    /// Ids not known to the store
    pub missing: Vec<String>,
}

impl ApplyOutcome {
    /// Every resource in the payload was written
    pub fn is_complete(&self) -> bool {
        self.conflicts.is_empty() && self.missing.is_empty()
    }
}

/// Authoritative resource collection
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Snapshot of the whole collection
    async fn list(&self) -> StoreResult<Vec<Resource>>;

    /// Single resource by id
    async fn get(&self, id: &str) -> StoreResult<Resource>;

    /// Replace label maps per resource
    ///
    /// Each write appends a bulk history entry and issues a new fingerprint.
    /// Stale fingerprints and unknown ids are reported in the outcome.
    async fn apply_label_updates(
        &self,
        payload: &ApplyPayload,
        context: &ApplyContext,
    ) -> StoreResult<ApplyOutcome>;

    /// Restore the most recent prior label snapshot of one resource
    async fn revert(&self, id: &str, context: &ApplyContext) -> StoreResult<Resource>;
}
