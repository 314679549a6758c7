// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Sorting and Pagination

use fleet_governance::domain::Resource;
use fleet_governance::filter::{FilterConfig, SortDirection, SortKey};
use fleet_governance::view::{filter_sort_paginate_group, paginate, sort_resources, ViewRequest, ViewRow};
use proptest::prelude::*;

use super::{fleet, sort_direction, sort_key};

fn positions(resources: &[&Resource]) -> Vec<usize> {
    resources
        .iter()
        .map(|r| r.id().trim_start_matches("r-").parse().expect("fixture id"))
        .collect()
}

/// Key projection equal exactly when the sort comparator says equal
fn sort_value(key: SortKey, resource: &Resource) -> String {
    match key {
        SortKey::Name => resource.name.clone(),
        SortKey::Type => resource.resource_type.as_str().to_string(),
        SortKey::Zone => resource.zone.clone(),
        SortKey::Status => resource.status.as_str().to_string(),
        SortKey::MachineType => format!("{:?}", resource.machine_type()),
        SortKey::CreatedAt => resource.created_at.to_rfc3339(),
        SortKey::LabelCount => resource.labels().len().to_string(),
        SortKey::Id | SortKey::Unknown => resource.id().to_string(),
    }
}

proptest! {
    /// Ties keep their original relative order in both directions
    #[test]
    fn prop_sort_is_stable(fleet in fleet(), key in sort_key(), direction in sort_direction()) {
        let mut sorted: Vec<&Resource> = fleet.iter().collect();
        sort_resources(&mut sorted, Some(key), direction);

        for pair in sorted.windows(2) {
            if sort_value(key, pair[0]) == sort_value(key, pair[1]) {
                let order = positions(pair);
                prop_assert!(order[0] < order[1]);
            }
        }
    }

    /// Desc is Asc reversed up to ties
    #[test]
    fn prop_desc_mirrors_asc(fleet in fleet(), key in sort_key()) {
        let mut asc: Vec<&Resource> = fleet.iter().collect();
        let mut desc = asc.clone();
        sort_resources(&mut asc, Some(key), SortDirection::Asc);
        sort_resources(&mut desc, Some(key), SortDirection::Desc);

        let asc_values: Vec<_> = asc.iter().map(|r| sort_value(key, r)).collect();
        let mut desc_values: Vec<_> = desc.iter().map(|r| sort_value(key, r)).collect();
        desc_values.reverse();
        prop_assert_eq!(asc_values, desc_values);
    }

    /// Pages partition the rows and the effective page is always in range
    #[test]
    fn prop_pages_partition_rows(fleet in fleet(), page_size in 0usize..5, page in 0usize..8) {
        let rows: Vec<ViewRow<'_>> = fleet
            .iter()
            .map(|resource| ViewRow::Item { resource, group: None })
            .collect();
        let result = paginate(rows, page, page_size, fleet.len());

        prop_assert!(result.page >= 1 && result.page <= result.total_pages);
        prop_assert!(result.rows.len() <= result.page_size);

        let request = ViewRequest::new(1, page_size);
        let mut seen = 0;
        for index in 1..=result.total_pages {
            let page = filter_sort_paginate_group(&fleet, &FilterConfig::default(), &ViewRequest { page: index, ..request.clone() });
            seen += page.rows.len();
        }
        prop_assert_eq!(seen, fleet.len());
    }
}
