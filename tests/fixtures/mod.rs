// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for fleet-governance
//!
//! Provides a deterministic fleet used across the integration suites.
//! All ids, fingerprints and timestamps are fixed constants so tests are
//! reproducible.
//!
//! # Design Principles
//! - All test data is deterministic (no `Uuid::now_v7()` or `Utc::now()`)
//! - Fixtures are the only place that constructs the shared fleet
//! - Timestamps passed to the store come from [`apply_timestamp`]

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use fleet_governance::domain::{
    LabelFingerprint, NetworkInterface, Resource, ResourceBuilder, ResourceStatus, ResourceType,
};

// Fixed apply timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub const ACTOR: &str = "fixture-operator";

/// Parse the fixed apply timestamp
pub fn apply_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// Midday UTC on the given date
pub fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 12, 0, 0)
        .single()
        .expect("Invalid date in test fixture")
}

fn public_interface() -> NetworkInterface {
    NetworkInterface {
        network: Some("default".to_string()),
        internal_ip: Some("10.0.0.2".to_string()),
        external_ip: Some("34.1.2.3".to_string()),
    }
}

fn private_interface() -> NetworkInterface {
    NetworkInterface {
        network: Some("default".to_string()),
        internal_ip: Some("10.0.0.3".to_string()),
        external_ip: None,
    }
}

fn base(id: &str, name: &str, resource_type: ResourceType, created: DateTime<Utc>) -> ResourceBuilder {
    Resource::builder(id, name, resource_type, created)
        .fingerprint(LabelFingerprint::new(format!("fp-{}", id)))
}

/// Eight resources spanning every type, two unlabeled
///
/// | id         | name               | type      | zone          | status     | labels                    |
/// |------------|--------------------|-----------|---------------|------------|---------------------------|
/// | vm-001     | prod-web-01        | INSTANCE  | us-central1-a | RUNNING    | env=prod team=web         |
/// | vm-002     | prod-api-02        | INSTANCE  | us-central1-b | RUNNING    | env=prod team=api         |
/// | vm-003     | dev-web-03         | INSTANCE  | us-central1-a | STOPPED    | env=dev team=web          |
/// | disk-001   | prod-web-01-boot   | DISK      | us-central1-a | READY      | env=prod                  |
/// | sql-001    | staging-payments-7 | CLOUD_SQL | us-east1      | READY      |                           |
/// | run-001    | checkout-svc       | CLOUD_RUN | global        | READY      | team=payments legacy=true |
/// | bucket-001 | assets-archive     | BUCKET    | global        | READY      |                           |
/// | vm-004     | legacy-batch-09    | INSTANCE  | us-east1-b    | TERMINATED | env=dev legacy=true       |
///
/// Instances carry machine types; vm-001 and vm-003 have external addresses.
pub fn fleet() -> Vec<Resource> {
    vec![
        base("vm-001", "prod-web-01", ResourceType::Instance, day(2025, 1, 10))
            .zone("us-central1-a")
            .status(ResourceStatus::Running)
            .machine_type("n2-standard-4")
            .network_interface(public_interface())
            .label("env", "prod")
            .label("team", "web")
            .build(),
        base("vm-002", "prod-api-02", ResourceType::Instance, day(2025, 2, 14))
            .zone("us-central1-b")
            .status(ResourceStatus::Running)
            .machine_type("n2-standard-8")
            .network_interface(private_interface())
            .label("env", "prod")
            .label("team", "api")
            .build(),
        base("vm-003", "dev-web-03", ResourceType::Instance, day(2025, 3, 1))
            .zone("us-central1-a")
            .status(ResourceStatus::Stopped)
            .machine_type("e2-medium")
            .network_interface(public_interface())
            .label("env", "dev")
            .label("team", "web")
            .build(),
        base("disk-001", "prod-web-01-boot", ResourceType::Disk, day(2025, 1, 10))
            .zone("us-central1-a")
            .status(ResourceStatus::Ready)
            .label("env", "prod")
            .build(),
        base("sql-001", "staging-payments-7", ResourceType::CloudSql, day(2025, 4, 20))
            .zone("us-east1")
            .status(ResourceStatus::Ready)
            .build(),
        base("run-001", "checkout-svc", ResourceType::CloudRun, day(2025, 5, 5))
            .status(ResourceStatus::Ready)
            .label("team", "payments")
            .label("legacy", "true")
            .build(),
        base("bucket-001", "assets-archive", ResourceType::Bucket, day(2024, 12, 31))
            .status(ResourceStatus::Ready)
            .build(),
        base("vm-004", "legacy-batch-09", ResourceType::Instance, day(2024, 11, 11))
            .zone("us-east1-b")
            .status(ResourceStatus::Terminated)
            .machine_type("e2-small")
            .label("env", "dev")
            .label("legacy", "true")
            .build(),
    ]
}

/// Owned id list for selection APIs
pub fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|id| id.to_string()).collect()
}

/// Ids of `resources` in order
pub fn ids_of<'a>(resources: impl IntoIterator<Item = &'a Resource>) -> Vec<&'a str> {
    resources.into_iter().map(Resource::id).collect()
}
