// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fleet Governance Engine
//!
//! Faceted filtering and bulk label transformation over a fleet of cloud
//! resources. The core is a set of pure functions invoked on demand; only the
//! resource store and the advisory service cross an async boundary.
//!
//! ## Architecture
//!
//! ```text
//! ResourceStore::list ──▶ evaluate_filter ──▶ compute_facets
//!                              │
//!                              └──▶ filter_sort_paginate_group ──▶ Page
//!
//! selection ──▶ LabelStrategy ──▶ run_strategy ──▶ Preview
//!                                                    │
//!                         validity gate ──▶ build_apply_payload ──▶ ResourceStore
//! ```
//!
//! ## Key Concepts
//!
//! - **Resource**: one cloud asset with labels and append-only label history
//! - **FilterConfig**: conjunctive predicate over resource attributes and labels
//! - **Facets**: per-dimension counts, each with its own dimension relaxed
//! - **LabelStrategy**: static, pattern, regex or cleanup rule
//! - **Preview**: per-resource label diffs, never applied implicitly
//!
//! ## Usage
//!
//! ```rust
//! use fleet_governance::*;
//! use chrono::{TimeZone, Utc};
//!
//! let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let fleet = vec![
//!     Resource::builder("vm-1", "prod-web-42", ResourceType::Instance, created).build(),
//! ];
//!
//! let filter = FilterConfig::new().with_search("web");
//! assert!(evaluate_filter(&fleet[0], &filter));
//!
//! let strategy: LabelStrategy = PatternRule::new(
//!     "-",
//!     vec![PositionMapping::new(0, "env"), PositionMapping::new(1, "app")],
//! )
//! .into();
//! let preview = run_strategy(&strategy, &fleet);
//! let payload = build_apply_payload(&preview);
//! assert_eq!(payload.labels["vm-1"].get("env"), Some("prod"));
//! ```

pub mod adapters;
pub mod advisory;
pub mod changeset;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod rules;
pub mod service;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use adapters::CloudLabelValidator;
pub use advisory::{
    parse_analysis, prefill_strategy, request_advice, Advice, AdvisoryError, AdvisoryService,
    NameAnalysis, SuggestedConfig,
};
pub use changeset::{build_apply_payload, diff_labels, run_strategy, ApplyPayload, Change, Preview, ResourcePreview};
pub use config::{ConfigError, GovernanceConfig};
pub use domain::{
    HistoryChangeType, LabelError, LabelFingerprint, LabelHistoryEntry, LabelMap, LabelValidator,
    NetworkInterface, Resource, ResourceAttributes, ResourceStatus, ResourceType,
};
pub use errors::{GovernanceError, GovernanceResult};
pub use filter::{
    compute_facets, evaluate_filter, FacetCounts, FacetDimension, Facets, FilterConfig,
    LabelConstraint, LabelLogic, SortDirection, SortKey,
};
pub use rules::{
    CleanupRule, GroupMapping, LabelPair, LabelRule, LabelStrategy, PatternRule, PositionMapping,
    RegexRule, RuleIssue, RuleValidity, StaticRule, StrategyKind,
};
pub use service::LabelingService;
pub use store::{ApplyContext, ApplyOutcome, InMemoryResourceStore, ResourceStore, StoreError, StoreResult};
pub use view::{filter_sort_paginate_group, Page, ViewRequest, ViewRow, UNASSIGNED_GROUP};
