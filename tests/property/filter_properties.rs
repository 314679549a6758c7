// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Filter Predicate

use fleet_governance::filter::{evaluate_filter, CompiledFilter, FilterConfig, LabelLogic};
use proptest::prelude::*;

use super::{filter_config, fleet};

proptest! {
    /// Same resource and config always give the same answer
    #[test]
    fn prop_evaluation_is_deterministic(fleet in fleet(), config in filter_config()) {
        for resource in &fleet {
            prop_assert_eq!(evaluate_filter(resource, &config), evaluate_filter(resource, &config));
        }
    }

    /// Compiling once and evaluating per resource agrees with the one-shot form
    #[test]
    fn prop_compiled_filter_agrees(fleet in fleet(), config in filter_config()) {
        let compiled = CompiledFilter::new(&config);
        for resource in &fleet {
            prop_assert_eq!(compiled.matches(resource), evaluate_filter(resource, &config));
        }
    }

    /// Adding a constraint under AND logic never widens the result
    #[test]
    fn prop_and_constraints_only_narrow(fleet in fleet(), config in filter_config()) {
        let base = config.clone().with_label_logic(LabelLogic::And);
        let narrower = base.clone().with_label("env", "prod");
        for resource in &fleet {
            if evaluate_filter(resource, &narrower) {
                prop_assert!(evaluate_filter(resource, &base));
            }
        }
    }

    /// Unlabeled-only matches exactly the resources without labels, among those
    /// passing the other constraints
    #[test]
    fn prop_unlabeled_only_short_circuits(fleet in fleet()) {
        let config = FilterConfig::new().with_label("env", "prod").unlabeled_only();
        for resource in &fleet {
            prop_assert_eq!(evaluate_filter(resource, &config), resource.labels().is_empty());
        }
    }
}
