// Copyright (c) 2025 - Cowboy AI, Inc.
//! Labeling service

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::advisory::{request_advice, Advice, AdvisoryService};
use crate::changeset::{build_apply_payload, run_strategy, Preview};
use crate::config::GovernanceConfig;
use crate::domain::{LabelValidator, Resource};
use crate::errors::{GovernanceError, GovernanceResult};
use crate::filter::{compute_facets, CompiledFilter, Facets, FilterConfig};
use crate::rules::{LabelStrategy, RuleValidity};
use crate::store::{ApplyContext, ApplyOutcome, ResourceStore};

/// Bulk labeling over a resource store
pub struct LabelingService<S: ResourceStore> {
    store: S,
    validator: Arc<dyn LabelValidator>,
    config: GovernanceConfig,
}

impl<S: ResourceStore> LabelingService<S> {
    pub fn new(store: S, validator: Arc<dyn LabelValidator>, config: GovernanceConfig) -> Self {
        Self {
            store,
            validator,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    /// Filter config with the configured default sort filled in
    pub fn with_default_sort(&self, mut filter: FilterConfig) -> FilterConfig {
        if filter.sort_key.is_none() {
            filter.sort_key = self.config.default_sort_key;
            filter.sort_direction = self.config.default_sort_direction;
        }
        filter
    }

    /// Resources matching `filter`, in store order
    pub async fn matching(&self, filter: &FilterConfig) -> GovernanceResult<Vec<Resource>> {
        let compiled = CompiledFilter::new(filter);
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|resource| compiled.matches(resource))
            .collect())
    }

    /// Facet counts for the current collection
    pub async fn facets(&self, filter: &FilterConfig) -> GovernanceResult<Facets> {
        let collection = self.store.list().await?;
        Ok(compute_facets(&collection, filter))
    }

    /// Validity gate for `strategy`
    pub fn validate(&self, strategy: &LabelStrategy) -> RuleValidity {
        strategy.validate(self.validator.as_ref())
    }

    fn ensure_applicable(&self, strategy: &LabelStrategy) -> GovernanceResult<()> {
        let validity = self.validate(strategy);
        if !validity.is_valid() {
            return Err(GovernanceError::InvalidStrategy(validity.summary()));
        }
        if let LabelStrategy::Static(rule) = strategy {
            rule.label_set(self.validator.as_ref())?;
        }
        Ok(())
    }

    /// Preview `strategy` over the selected ids
    ///
    /// Entries follow the order of `ids`; unknown ids are ignored.
    pub async fn preview(&self, ids: &[String], strategy: &LabelStrategy) -> GovernanceResult<Preview> {
        let collection = self.store.list().await?;
        Ok(self.preview_over(&collection, ids, strategy))
    }

    fn preview_over(&self, collection: &[Resource], ids: &[String], strategy: &LabelStrategy) -> Preview {
        let by_id: BTreeMap<&str, &Resource> = collection
            .iter()
            .map(|resource| (resource.id(), resource))
            .collect();

        let selection: Vec<&Resource> = ids
            .iter()
            .filter_map(|id| {
                let found = by_id.get(id.as_str()).copied();
                if found.is_none() {
                    debug!(resource_id = %id, "Selected resource not in collection");
                }
                found
            })
            .collect();

        run_strategy(strategy, selection)
    }

    /// Gate, preview and write `strategy` over the selected ids
    ///
    /// The preview is rebuilt from a fresh listing. Use
    /// [`apply_preview`](Self::apply_preview) to write a preview the caller
    /// already confirmed.
    ///
    /// # Errors
    ///
    /// - [`GovernanceError::InvalidStrategy`] if the parameters fail the gate
    /// - [`GovernanceError::Label`] if static rows repeat a key
    /// - [`GovernanceError::Store`] if the store rejects the write
    pub async fn apply(
        &self,
        ids: &[String],
        strategy: &LabelStrategy,
        timestamp: DateTime<Utc>,
    ) -> GovernanceResult<ApplyOutcome> {
        let context = ApplyContext::new(self.config.default_actor.clone(), timestamp);
        self.apply_with_context(ids, strategy, &context).await
    }

    pub async fn apply_with_context(
        &self,
        ids: &[String],
        strategy: &LabelStrategy,
        context: &ApplyContext,
    ) -> GovernanceResult<ApplyOutcome> {
        self.ensure_applicable(strategy)?;
        let preview = self.preview(ids, strategy).await?;
        self.write_preview(&preview, context).await
    }

    /// Write a confirmed preview of `strategy`
    ///
    /// The payload carries the fingerprints seen when `preview` was built, so
    /// resources relabeled since then come back as conflicts.
    pub async fn apply_preview(
        &self,
        strategy: &LabelStrategy,
        preview: &Preview,
        context: &ApplyContext,
    ) -> GovernanceResult<ApplyOutcome> {
        if preview.strategy != strategy.kind() {
            return Err(GovernanceError::InvalidStrategy(format!(
                "preview was built by the {} strategy, not {}",
                preview.strategy,
                strategy.kind()
            )));
        }
        self.ensure_applicable(strategy)?;
        self.write_preview(preview, context).await
    }

    async fn write_preview(&self, preview: &Preview, context: &ApplyContext) -> GovernanceResult<ApplyOutcome> {
        let payload = build_apply_payload(preview);
        if payload.is_empty() {
            info!(strategy = %preview.strategy, "Nothing to apply");
            return Ok(ApplyOutcome::default());
        }

        info!(
            strategy = %preview.strategy,
            resources = payload.len(),
            changes = preview.change_count(),
            actor = %context.actor,
            "Applying label strategy"
        );
        Ok(self.store.apply_label_updates(&payload, context).await?)
    }

    /// Restore one resource's previous labels
    pub async fn revert(&self, id: &str, timestamp: DateTime<Utc>) -> GovernanceResult<Resource> {
        let context = ApplyContext::new(self.config.default_actor.clone(), timestamp);
        Ok(self.store.revert(id, &context).await?)
    }

    /// Ask an advisory service about the selected resources' names
    pub async fn suggest(
        &self,
        advisory: &dyn AdvisoryService,
        ids: &[String],
    ) -> GovernanceResult<Advice> {
        let collection = self.store.list().await?;
        let names: Vec<String> = collection
            .iter()
            .filter(|resource| ids.iter().any(|id| id == resource.id()))
            .map(|resource| resource.name.clone())
            .collect();
        Ok(request_advice(advisory, &names).await)
    }
}
