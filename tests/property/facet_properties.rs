// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Faceted Counts

use fleet_governance::filter::facets::dimensions_of;
use fleet_governance::filter::{compute_facets, evaluate_filter, FacetDimension, FilterConfig};
use proptest::prelude::*;

use super::{filter_config, fleet};

const FIXED: [FacetDimension; 3] = [FacetDimension::Status, FacetDimension::Type, FacetDimension::Zone];

proptest! {
    /// Each dimension's facet, machine type and label keys included, sums to
    /// the size of the result with that dimension relaxed
    #[test]
    fn prop_facet_sums_match_relaxed_results(fleet in fleet(), config in filter_config()) {
        let facets = compute_facets(&fleet, &config);
        for dimension in dimensions_of(&fleet) {
            let relaxed = config.without(&dimension);
            let expected = fleet.iter().filter(|r| evaluate_filter(r, &relaxed)).count();
            let counts = facets.dimension(&dimension).expect("dimension present");
            prop_assert_eq!(counts.total(), expected, "dimension {}", dimension);
        }
    }

    /// Relaxing any single dimension never lowers any facet count
    #[test]
    fn prop_relaxing_one_dimension_never_lowers_counts(
        fleet in fleet(),
        config in filter_config(),
    ) {
        let facets = compute_facets(&fleet, &config);
        for relaxed_dimension in dimensions_of(&fleet) {
            let relaxed = compute_facets(&fleet, &config.without(&relaxed_dimension));
            for (dimension, counts) in facets.iter() {
                let looser = relaxed.dimension(dimension).expect("same dimensions");
                for (value, count) in counts.iter() {
                    prop_assert!(
                        count <= looser.get(value),
                        "{} {}={} dropped after relaxing {}",
                        dimension,
                        value,
                        count,
                        relaxed_dimension
                    );
                }
            }
        }
    }

    /// A facet count never exceeds the unfiltered count for the same value
    #[test]
    fn prop_filtering_only_lowers_counts(fleet in fleet(), config in filter_config()) {
        let unfiltered = compute_facets(&fleet, &FilterConfig::default());
        let filtered = compute_facets(&fleet, &config);
        for dimension in &FIXED {
            let all = unfiltered.dimension(dimension).expect("fixed dimension present");
            let some = filtered.dimension(dimension).expect("fixed dimension present");
            for (value, count) in some.iter() {
                prop_assert!(count <= all.get(value));
            }
        }
    }

    /// Unfiltered status facets sum to the fleet size
    #[test]
    fn prop_unfiltered_status_total(fleet in fleet()) {
        let facets = compute_facets(&fleet, &FilterConfig::default());
        let status = facets.dimension(&FacetDimension::Status).expect("status present");
        prop_assert_eq!(status.total(), fleet.len());
    }
}
