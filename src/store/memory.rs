// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory resource store

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::{ApplyContext, ApplyOutcome, ResourceStore, StoreError, StoreResult};
use crate::changeset::ApplyPayload;
use crate::domain::{HistoryChangeType, Resource};

/// Resource store backed by a shared vector
///
/// Cloning the store shares the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceStore {
    resources: Arc<RwLock<Vec<Resource>>>,
}

impl InMemoryResourceStore {
    /// Create a store, rejecting duplicate ids
    pub fn new(resources: Vec<Resource>) -> StoreResult<Self> {
        let mut seen = BTreeSet::new();
        for resource in &resources {
            if !seen.insert(resource.id()) {
                return Err(StoreError::DuplicateId(resource.id().to_string()));
            }
        }
        Ok(Self {
            resources: Arc::new(RwLock::new(resources)),
        })
    }

    /// Load a collection from a JSON array of resources
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let resources: Vec<Resource> =
            serde_json::from_str(json).map_err(|e| StoreError::Configuration(e.to_string()))?;
        Self::new(resources)
    }

    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn list(&self) -> StoreResult<Vec<Resource>> {
        Ok(self.resources.read().await.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Resource> {
        self.resources
            .read()
            .await
            .iter()
            .find(|resource| resource.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn apply_label_updates(
        &self,
        payload: &ApplyPayload,
        context: &ApplyContext,
    ) -> StoreResult<ApplyOutcome> {
        let mut resources = self.resources.write().await;
        let mut outcome = ApplyOutcome::default();

        for (id, labels) in &payload.labels {
            let Some(resource) = resources.iter_mut().find(|resource| resource.id() == id) else {
                warn!(resource_id = %id, "Skipping label update for unknown resource");
                outcome.missing.push(id.clone());
                continue;
            };

            if let Some(expected) = payload.fingerprints.get(id) {
                if expected != resource.label_fingerprint() {
                    warn!(
                        resource_id = %id,
                        expected = %expected,
                        actual = %resource.label_fingerprint(),
                        "Stale label fingerprint, skipping"
                    );
                    outcome.conflicts.push(id.clone());
                    continue;
                }
            }

            resource.replace_labels(
                labels.clone(),
                context.timestamp,
                &context.actor,
                HistoryChangeType::Bulk,
            );
            outcome.applied.push(id.clone());
        }

        info!(
            actor = %context.actor,
            applied = outcome.applied.len(),
            conflicts = outcome.conflicts.len(),
            missing = outcome.missing.len(),
            "Applied label updates"
        );
        Ok(outcome)
    }

    async fn revert(&self, id: &str, context: &ApplyContext) -> StoreResult<Resource> {
        let mut resources = self.resources.write().await;
        let resource = resources
            .iter_mut()
            .find(|resource| resource.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let previous = resource
            .prior_labels()
            .cloned()
            .ok_or_else(|| StoreError::NothingToRevert(id.to_string()))?;

        resource.replace_labels(previous, context.timestamp, &context.actor, HistoryChangeType::Revert);
        info!(resource_id = %id, actor = %context.actor, "Reverted labels");
        Ok(resource.clone())
    }
}
