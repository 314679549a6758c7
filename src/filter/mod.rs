// Copyright (c) 2025 - Cowboy AI, Inc.
//! Faceted Filtering
//!
//! A [`FilterConfig`] describes one query over the resource collection. It is
//! a plain value: built by the caller, handed to the engine on every call and
//! never retained between calls.
//!
//! ```text
//! Collection + FilterConfig
//!        │
//!        ├──> evaluate_filter (per resource) ──> filtered set ──> view stage
//!        │
//!        └──> compute_facets (one pass per dimension) ──> facet counts
//! ```
//!
//! All constraints are ANDed at the top level. Empty sets and unset options
//! are unconstrained.

pub mod facets;
pub mod predicate;

pub use facets::{compute_facets, FacetCounts, FacetDimension, Facets};
pub use predicate::{evaluate_filter, CompiledFilter};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{ResourceStatus, ResourceType};

/// How label constraints combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabelLogic {
    /// Every constraint must hold
    #[default]
    And,
    /// At least one constraint must hold
    Or,
}

/// One `key = value` label requirement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelConstraint {
    pub key: String,
    pub value: String,
}

impl LabelConstraint {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Sortable resource attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Id,
    Type,
    Zone,
    Status,
    MachineType,
    CreatedAt,
    LabelCount,
    /// Unrecognised key; sorting falls back to insertion order
    #[serde(other)]
    Unknown,
}

impl SortKey {
    /// Parse a sort key name, case-insensitively
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "name" => Self::Name,
            "id" => Self::Id,
            "type" => Self::Type,
            "zone" => Self::Zone,
            "status" => Self::Status,
            "machinetype" => Self::MachineType,
            "createdat" | "created" | "date" => Self::CreatedAt,
            "labelcount" | "labels" => Self::LabelCount,
            _ => Self::Unknown,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Filter, sort and grouping configuration for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against name and id
    pub search: String,

    pub statuses: BTreeSet<ResourceStatus>,

    pub types: BTreeSet<ResourceType>,

    pub zones: BTreeSet<String>,

    pub machine_types: BTreeSet<String>,

    /// `Some(true)` requires an external address, `Some(false)` forbids one
    pub has_public_ip: Option<bool>,

    /// Inclusive lower bound on creation time (RFC 3339 or `YYYY-MM-DD`)
    pub date_start: Option<String>,

    /// Inclusive upper bound on creation time (RFC 3339 or `YYYY-MM-DD`)
    pub date_end: Option<String>,

    pub label_logic: LabelLogic,

    pub label_constraints: Vec<LabelConstraint>,

    /// Only resources with no labels at all; overrides label constraints
    pub show_unlabeled_only: bool,

    pub sort_key: Option<SortKey>,

    pub sort_direction: SortDirection,

    /// Label key to group the view by
    pub group_by: Option<String>,
}

impl FilterConfig {
    /// Unconstrained configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: ResourceStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.types.insert(resource_type);
        self
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zones.insert(zone.into());
        self
    }

    pub fn with_machine_type(mut self, machine_type: impl Into<String>) -> Self {
        self.machine_types.insert(machine_type.into());
        self
    }

    pub fn with_public_ip(mut self, has_public_ip: bool) -> Self {
        self.has_public_ip = Some(has_public_ip);
        self
    }

    pub fn with_date_range(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.date_start = start.map(str::to_string);
        self.date_end = end.map(str::to_string);
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_constraints.push(LabelConstraint::new(key, value));
        self
    }

    pub fn with_label_logic(mut self, logic: LabelLogic) -> Self {
        self.label_logic = logic;
        self
    }

    pub fn unlabeled_only(mut self) -> Self {
        self.show_unlabeled_only = true;
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = Some(key);
        self.sort_direction = direction;
        self
    }

    pub fn grouped_by(mut self, label_key: impl Into<String>) -> Self {
        self.group_by = Some(label_key.into());
        self
    }

    /// Copy of this configuration with one facet dimension unconstrained
    ///
    /// Under AND logic dropping a label dimension removes every constraint on
    /// that key and keeps the others. Under OR logic a free key satisfies the
    /// whole disjunction, so the label clause is cleared entirely. The
    /// unlabeled-only flag stays in force either way.
    pub fn without(&self, dimension: &FacetDimension) -> Self {
        let mut relaxed = self.clone();
        match dimension {
            FacetDimension::Status => relaxed.statuses.clear(),
            FacetDimension::Type => relaxed.types.clear(),
            FacetDimension::Zone => relaxed.zones.clear(),
            FacetDimension::MachineType => relaxed.machine_types.clear(),
            FacetDimension::Label(key) => {
                let constrained = relaxed.label_constraints.iter().any(|c| &c.key == key);
                match relaxed.label_logic {
                    LabelLogic::Or if constrained => relaxed.label_constraints.clear(),
                    _ => relaxed.label_constraints.retain(|c| &c.key != key),
                }
            }
        }
        relaxed
    }
}
