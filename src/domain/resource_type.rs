// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Resource Type and Status Taxonomy
//!
//! Closed vocabularies for the kinds of cloud assets the governance engine
//! indexes and the lifecycle states those assets report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cloud resource type taxonomy
///
/// Every resource belongs to exactly one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// Virtual machine instance
    Instance,
    /// Persistent disk
    Disk,
    /// Managed SQL database instance
    CloudSql,
    /// Serverless container service
    CloudRun,
    /// Object storage bucket
    Bucket,
}

impl ResourceType {
    /// All resource types in declaration order
    pub const ALL: [ResourceType; 5] = [
        Self::Instance,
        Self::Disk,
        Self::CloudSql,
        Self::CloudRun,
        Self::Bucket,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "INSTANCE",
            Self::Disk => "DISK",
            Self::CloudSql => "CLOUD_SQL",
            Self::CloudRun => "CLOUD_RUN",
            Self::Bucket => "BUCKET",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instance => "VM Instance",
            Self::Disk => "Persistent Disk",
            Self::CloudSql => "Cloud SQL",
            Self::CloudRun => "Cloud Run",
            Self::Bucket => "Storage Bucket",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle status reported by a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceStatus {
    Running,
    Stopped,
    /// Cloud SQL reports this state as `RUNNABLE`
    #[serde(alias = "RUNNABLE")]
    Ready,
    Terminated,
    Provisioning,
    Staging,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl ResourceStatus {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Stopped => "STOPPED",
            Self::Ready => "READY",
            Self::Terminated => "TERMINATED",
            Self::Provisioning => "PROVISIONING",
            Self::Staging => "STAGING",
            Self::Suspended => "SUSPENDED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
