// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fleet Domain Models
//!
//! Core domain concepts for governing a fleet of cloud resources.
//!
//! # Value Objects
//!
//! - [`ResourceType`] - Closed cloud resource taxonomy
//! - [`ResourceStatus`] - Reported lifecycle status
//! - [`LabelMap`] - Unique-keyed label mapping with validated construction
//! - [`LabelFingerprint`] - Opaque concurrency token owned by the store
//!
//! # Entities
//!
//! - [`Resource`] - One cloud asset with its append-only label history

pub mod labels;
pub mod resource;
pub mod resource_type;

pub use labels::{LabelError, LabelMap, LabelValidator};
pub use resource::{
    AttachedDisk, HistoryChangeType, LabelFingerprint, LabelHistoryEntry, NetworkInterface,
    Resource, ResourceAttributes, ResourceBuilder, GLOBAL_ZONE,
};
pub use resource_type::{ResourceStatus, ResourceType};
