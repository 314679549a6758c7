// Copyright (c) 2025 - Cowboy AI, Inc.
//! Faceted Counter
//!
//! For every filterable dimension, counts how many resources would match the
//! active configuration if that dimension's own constraint were dropped while
//! every other constraint stays in force. With a status filter active the
//! status facet still reports "12 RUNNING, 3 STOPPED" instead of collapsing
//! the unselected values to zero.
//!
//! # Cost
//!
//! One predicate pass over the full collection per dimension:
//! `O(dimensions × |collection|)`, independent of the number of values.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

use super::{CompiledFilter, FilterConfig};
use crate::domain::Resource;
use crate::view::UNASSIGNED_GROUP;

/// A filterable dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetDimension {
    Status,
    Type,
    Zone,
    MachineType,
    /// Values of one label key
    Label(String),
}

impl FacetDimension {
    /// Stable string key (`status`, `type`, `zone`, `machineType`, `label:<key>`)
    pub fn key(&self) -> String {
        match self {
            Self::Status => "status".to_string(),
            Self::Type => "type".to_string(),
            Self::Zone => "zone".to_string(),
            Self::MachineType => "machineType".to_string(),
            Self::Label(key) => format!("label:{}", key),
        }
    }

    /// The resource's value along this dimension, if it has one
    pub fn value_of<'r>(&self, resource: &'r Resource) -> Option<&'r str> {
        match self {
            Self::Status => Some(resource.status.as_str()),
            Self::Type => Some(resource.resource_type.as_str()),
            Self::Zone => Some(resource.zone.as_str()),
            Self::MachineType => resource.machine_type(),
            Self::Label(key) => resource.labels().get(key),
        }
    }

    /// Facet bucket for the resource; value-less resources land in
    /// [`UNASSIGNED_GROUP`]
    pub fn bucket_of<'r>(&self, resource: &'r Resource) -> &'r str {
        self.value_of(resource).unwrap_or(UNASSIGNED_GROUP)
    }
}

impl fmt::Display for FacetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Value → count for one dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetCounts(BTreeMap<String, usize>);

impl FacetCounts {
    pub fn get(&self, value: &str) -> usize {
        self.0.get(value).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(value, count)| (value.as_str(), *count))
    }

    /// Values for display: highest count first, ties by ascending value
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(a_value, a_count), (b_value, b_count)| {
            b_count.cmp(a_count).then_with(|| a_value.cmp(b_value))
        });
        ranked
    }
}

/// Facet counts for every dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    dimensions: BTreeMap<FacetDimension, FacetCounts>,
}

impl Facets {
    pub fn dimension(&self, dimension: &FacetDimension) -> Option<&FacetCounts> {
        self.dimensions.get(dimension)
    }

    /// Counts for one label key
    pub fn label(&self, key: &str) -> Option<&FacetCounts> {
        self.dimensions.get(&FacetDimension::Label(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FacetDimension, &FacetCounts)> {
        self.dimensions.iter()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

impl Serialize for Facets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.dimensions.len()))?;
        for (dimension, counts) in &self.dimensions {
            map.serialize_entry(&dimension.key(), counts)?;
        }
        map.end()
    }
}

/// Every dimension the collection exposes: the fixed four plus each label key
/// present on at least one resource
pub fn dimensions_of(collection: &[Resource]) -> Vec<FacetDimension> {
    let label_keys: BTreeSet<&str> = collection
        .iter()
        .flat_map(|resource| resource.labels().keys())
        .collect();

    let mut dimensions = vec![
        FacetDimension::Status,
        FacetDimension::Type,
        FacetDimension::Zone,
        FacetDimension::MachineType,
    ];
    dimensions.extend(label_keys.into_iter().map(|key| FacetDimension::Label(key.to_string())));
    dimensions
}

/// Count one dimension with its own constraint removed
pub fn count_dimension(
    collection: &[Resource],
    config: &FilterConfig,
    dimension: &FacetDimension,
) -> FacetCounts {
    let relaxed = config.without(dimension);
    let filter = CompiledFilter::new(&relaxed);

    // Every bucket present in the collection shows up, even at zero.
    let mut counts: BTreeMap<String, usize> = collection
        .iter()
        .map(|resource| (dimension.bucket_of(resource).to_string(), 0))
        .collect();

    for resource in collection.iter().filter(|resource| filter.matches(resource)) {
        if let Some(count) = counts.get_mut(dimension.bucket_of(resource)) {
            *count += 1;
        }
    }

    FacetCounts(counts)
}

/// Compute facet counts for every dimension of `collection`
pub fn compute_facets(collection: &[Resource], config: &FilterConfig) -> Facets {
    let dimensions: BTreeMap<_, _> = dimensions_of(collection)
        .into_iter()
        .map(|dimension| {
            let counts = count_dimension(collection, config, &dimension);
            (dimension, counts)
        })
        .collect();

    debug!(
        resources = collection.len(),
        dimensions = dimensions.len(),
        "Computed facet counts"
    );

    Facets { dimensions }
}
