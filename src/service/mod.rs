// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Fleet Governance
//!
//! Orchestrates the pure core against a [`ResourceStore`](crate::store::ResourceStore).
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     ↓
//! LabelingService (this module)
//!     ├── store.list() ──▶ filter / facets / run_strategy (pure)
//!     ├── validity gate ──▶ build_apply_payload (pure)
//!     └── store.apply_label_updates() / store.revert()
//! ```
//!
//! # Design Principles
//!
//! 1. **Pure core**: services call pure functions and only the store does I/O
//! 2. **Preview before apply**: a confirmed preview is written with the
//!    fingerprints it observed; `apply` rebuilds one from a fresh listing
//! 3. **Gate at the boundary**: invalid strategy parameters never reach the store

pub mod labeling;

pub use labeling::LabelingService;
