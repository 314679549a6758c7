// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Strategies generating fleets and filter configurations, shared by the
//! property suites.

mod facet_properties;
mod filter_properties;
mod rule_properties;
mod view_properties;

use chrono::{TimeZone, Utc};
use fleet_governance::domain::{LabelMap, NetworkInterface, Resource, ResourceStatus, ResourceType};
use fleet_governance::filter::{FilterConfig, LabelLogic, SortDirection, SortKey};
use proptest::prelude::*;

pub const ZONES: &[&str] = &["us-central1-a", "us-east1-b", "global"];
pub const LABEL_KEYS: &[&str] = &["env", "team", "legacy"];
pub const LABEL_VALUES: &[&str] = &["prod", "dev", "web", "true"];
pub const MACHINE_TYPES: &[&str] = &["e2-small", "n2-standard-4"];
pub const NAME_TOKENS: &[&str] = &["prod", "dev", "web", "api", "db", "7", "42"];

pub fn resource_type() -> impl Strategy<Value = ResourceType> {
    proptest::sample::select(ResourceType::ALL.to_vec())
}

pub fn resource_status() -> impl Strategy<Value = ResourceStatus> {
    proptest::sample::select(vec![
        ResourceStatus::Running,
        ResourceStatus::Stopped,
        ResourceStatus::Ready,
        ResourceStatus::Terminated,
    ])
}

pub fn labels() -> impl Strategy<Value = LabelMap> {
    proptest::collection::btree_map(
        proptest::sample::select(LABEL_KEYS.to_vec()),
        proptest::sample::select(LABEL_VALUES.to_vec()),
        0..=3,
    )
    .prop_map(|map| map.into_iter().collect())
}

pub fn resource_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(NAME_TOKENS.to_vec()), 1..=4)
        .prop_map(|tokens| tokens.join("-"))
}

/// Fleet with unique ids `r-0..r-n`
pub fn fleet() -> impl Strategy<Value = Vec<Resource>> {
    proptest::collection::vec(
        (
            resource_name(),
            resource_type(),
            proptest::sample::select(ZONES.to_vec()),
            resource_status(),
            labels(),
            any::<bool>(),
            proptest::option::of(proptest::sample::select(MACHINE_TYPES.to_vec())),
            0u32..28,
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, resource_type, zone, status, labels, public, machine, day))| {
                let created = Utc
                    .with_ymd_and_hms(2025, 2, day + 1, 0, 0, 0)
                    .single()
                    .expect("valid fixture date");
                let mut builder = Resource::builder(format!("r-{}", i), name, resource_type, created)
                    .zone(zone)
                    .status(status)
                    .labels(labels);
                if let Some(machine) = machine {
                    builder = builder.machine_type(machine);
                }
                if public {
                    builder = builder.network_interface(NetworkInterface {
                        external_ip: Some("34.0.0.1".to_string()),
                        ..NetworkInterface::default()
                    });
                }
                builder.build()
            })
            .collect()
    })
}

pub fn filter_config() -> impl Strategy<Value = FilterConfig> {
    (
        proptest::option::of(proptest::sample::select(NAME_TOKENS.to_vec())),
        proptest::collection::btree_set(resource_status(), 0..=2),
        proptest::collection::btree_set(resource_type(), 0..=2),
        proptest::collection::btree_set(proptest::sample::select(ZONES.to_vec()), 0..=2),
        proptest::collection::btree_set(proptest::sample::select(MACHINE_TYPES.to_vec()), 0..=1),
        proptest::option::of(any::<bool>()),
        proptest::collection::vec(
            (
                proptest::sample::select(LABEL_KEYS.to_vec()),
                proptest::sample::select(LABEL_VALUES.to_vec()),
            ),
            0..=2,
        ),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(search, statuses, types, zones, machines, public, constraints, or_logic, unlabeled)| {
                let mut config = FilterConfig::new();
                if let Some(search) = search {
                    config = config.with_search(search);
                }
                config.statuses = statuses;
                config.types = types;
                config.zones = zones.into_iter().map(String::from).collect();
                config.machine_types = machines.into_iter().map(String::from).collect();
                config.has_public_ip = public;
                for (key, value) in constraints {
                    config = config.with_label(key, value);
                }
                if or_logic {
                    config = config.with_label_logic(LabelLogic::Or);
                }
                if unlabeled {
                    config = config.unlabeled_only();
                }
                config
            },
        )
}

pub fn sort_key() -> impl Strategy<Value = SortKey> {
    proptest::sample::select(vec![
        SortKey::Name,
        SortKey::Type,
        SortKey::Zone,
        SortKey::Status,
        SortKey::MachineType,
        SortKey::CreatedAt,
        SortKey::LabelCount,
    ])
}

pub fn sort_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}
