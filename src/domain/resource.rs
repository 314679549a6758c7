// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Resource Entity
//!
//! A [`Resource`] is one cloud asset as the governance engine sees it: an
//! immutable identity, placement and status, a mutable label map and the
//! append-only history of label changes.
//!
//! # Invariants
//! - `id` never changes once constructed
//! - `history` is only ever appended to
//! - the label fingerprint is replaced whenever the labels are replaced

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{LabelMap, ResourceStatus, ResourceType};

/// Zone sentinel for resources that are not zonal
pub const GLOBAL_ZONE: &str = "global";

/// Opaque optimistic-concurrency token for a resource's label state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelFingerprint(String);

impl LabelFingerprint {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Issue a fresh, never-before-seen token
    pub fn issue() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a label history entry came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryChangeType {
    /// Single-resource edit
    Manual,
    /// Bulk rule application
    Bulk,
    /// Restore of a prior snapshot
    Revert,
}

/// Immutable record of one label change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub change_type: HistoryChangeType,
    pub previous_labels: LabelMap,
    pub new_labels: LabelMap,
}

/// Disk attached to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedDisk {
    pub device_name: String,
    #[serde(default)]
    pub size_gb: u64,
    #[serde(default)]
    pub boot: bool,
}

/// Network interface with optional external address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ip: Option<String>,
}

impl NetworkInterface {
    /// Whether this interface carries a usable external address
    pub fn is_public(&self) -> bool {
        self.external_ip.as_deref().is_some_and(|ip| !ip.trim().is_empty())
    }
}

/// Kind-specific payload
///
/// Opaque to the engine except for the machine type and external addresses
/// read by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<AttachedDisk>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Cloud resource entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    pub zone: String,

    pub status: ResourceStatus,

    #[serde(default)]
    labels: LabelMap,

    #[serde(default)]
    label_fingerprint: LabelFingerprint,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    history: Vec<LabelHistoryEntry>,

    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub attributes: ResourceAttributes,
}

impl Resource {
    /// Builder pattern for fluent construction
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        resource_type: ResourceType,
        created_at: DateTime<Utc>,
    ) -> ResourceBuilder {
        ResourceBuilder::new(id.into(), name.into(), resource_type, created_at)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn label_fingerprint(&self) -> &LabelFingerprint {
        &self.label_fingerprint
    }

    /// Label history, oldest first
    pub fn history(&self) -> &[LabelHistoryEntry] {
        &self.history
    }

    pub fn machine_type(&self) -> Option<&str> {
        self.attributes.machine_type.as_deref()
    }

    /// Check for at least one interface with an external address
    pub fn has_public_ip(&self) -> bool {
        self.attributes.network_interfaces.iter().any(NetworkInterface::is_public)
    }

    /// Replace labels, recording the change
    ///
    /// # Invariant
    /// - History is appended, never rewritten
    /// - A new fingerprint is issued with every replacement
    pub(crate) fn replace_labels(
        &mut self,
        labels: LabelMap,
        timestamp: DateTime<Utc>,
        actor: &str,
        change_type: HistoryChangeType,
    ) {
        let previous = std::mem::replace(&mut self.labels, labels);
        self.history.push(LabelHistoryEntry {
            timestamp,
            actor: actor.to_string(),
            change_type,
            previous_labels: previous,
            new_labels: self.labels.clone(),
        });
        self.label_fingerprint = LabelFingerprint::issue();
    }

    /// Most recent snapshot that preceded the current labels
    pub fn prior_labels(&self) -> Option<&LabelMap> {
        self.history.last().map(|entry| &entry.previous_labels)
    }
}

/// Builder for Resource with fluent API
pub struct ResourceBuilder {
    resource: Resource,
}

impl ResourceBuilder {
    fn new(
        id: String,
        name: String,
        resource_type: ResourceType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            resource: Resource {
                id,
                name,
                resource_type,
                zone: GLOBAL_ZONE.to_string(),
                status: ResourceStatus::Unknown,
                labels: LabelMap::new(),
                label_fingerprint: LabelFingerprint::default(),
                history: Vec::new(),
                created_at,
                attributes: ResourceAttributes::default(),
            },
        }
    }

    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.resource.zone = zone.into();
        self
    }

    pub fn status(mut self, status: ResourceStatus) -> Self {
        self.resource.status = status;
        self
    }

    pub fn labels(mut self, labels: LabelMap) -> Self {
        self.resource.labels = labels;
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.resource.labels.insert(key, value);
        self
    }

    pub fn fingerprint(mut self, fingerprint: LabelFingerprint) -> Self {
        self.resource.label_fingerprint = fingerprint;
        self
    }

    pub fn history_entry(mut self, entry: LabelHistoryEntry) -> Self {
        self.resource.history.push(entry);
        self
    }

    pub fn machine_type(mut self, machine_type: impl Into<String>) -> Self {
        self.resource.attributes.machine_type = Some(machine_type.into());
        self
    }

    pub fn network_interface(mut self, interface: NetworkInterface) -> Self {
        self.resource.attributes.network_interfaces.push(interface);
        self
    }

    pub fn disk(mut self, disk: AttachedDisk) -> Self {
        self.resource.attributes.disks.push(disk);
        self
    }

    pub fn attributes(mut self, attributes: ResourceAttributes) -> Self {
        self.resource.attributes = attributes;
        self
    }

    pub fn build(self) -> Resource {
        self.resource
    }
}
