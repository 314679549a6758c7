// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sort / Group / Paginate Stage
//!
//! Turns a filtered resource set into one page of display rows.
//!
//! ```text
//! filtered ──> stable sort ──> group by label (optional) ──> flatten ──> page
//! ```
//!
//! # Ordering Rules
//!
//! - Sorting is stable; `Desc` reverses the comparator, so equal keys keep
//!   their original relative order in both directions
//! - Strings compare case-sensitively by code point, dates and counts
//!   numerically
//! - Groups are ordered ascending by key; [`UNASSIGNED_GROUP`] is ordered by
//!   the same rule as any other key
//!
//! # Pagination
//!
//! Pages slice the flattened header + row sequence. A collapsed group
//! contributes only its header, so collapsing changes the page count. A page
//! index beyond the last page resets to page 1.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::GovernanceConfig;
use crate::domain::Resource;
use crate::filter::{CompiledFilter, FilterConfig, SortDirection, SortKey};

/// Group label for resources lacking the grouping key
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// Page and grouping state for one view query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewRequest {
    /// 1-based page index
    pub page: usize,

    pub page_size: usize,

    /// Overrides the filter config's grouping key when set
    pub group_by: Option<String>,

    /// Group keys whose member rows are hidden
    pub collapsed_groups: BTreeSet<String>,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: GovernanceConfig::DEFAULT_PAGE_SIZE,
            group_by: None,
            collapsed_groups: BTreeSet::new(),
        }
    }
}

impl ViewRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// First page with the configured page size
    pub fn from_config(config: &GovernanceConfig) -> Self {
        Self::new(1, config.page_size)
    }

    pub fn grouped_by(mut self, label_key: impl Into<String>) -> Self {
        self.group_by = Some(label_key.into());
        self
    }

    pub fn collapse(mut self, group: impl Into<String>) -> Self {
        self.collapsed_groups.insert(group.into());
        self
    }

    pub fn expand(mut self, group: &str) -> Self {
        self.collapsed_groups.remove(group);
        self
    }
}

/// One display row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewRow<'a> {
    /// Group header
    Group {
        key: String,
        count: usize,
        collapsed: bool,
    },
    /// Resource row
    #[serde(rename_all = "camelCase")]
    Item {
        resource: &'a Resource,
        #[serde(skip_serializing_if = "Option::is_none")]
        group: Option<String>,
    },
}

impl<'a> ViewRow<'a> {
    pub fn resource(&self) -> Option<&'a Resource> {
        match self {
            Self::Item { resource, .. } => Some(resource),
            Self::Group { .. } => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

/// Resources sharing one grouping value, in sort order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup<'a> {
    pub key: String,
    pub members: Vec<&'a Resource>,
}

/// One page of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub rows: Vec<ViewRow<'a>>,

    /// Effective 1-based page index after any reset
    pub page: usize,

    pub page_size: usize,

    pub total_pages: usize,

    /// Resources that matched the filter
    pub total_items: usize,

    /// Flattened header + row count that pagination ran over
    pub total_rows: usize,
}

/// Compare two resources along one sort key, ascending
fn compare_by(key: SortKey, a: &Resource, b: &Resource) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Id => a.id().cmp(b.id()),
        SortKey::Type => a.resource_type.as_str().cmp(b.resource_type.as_str()),
        SortKey::Zone => a.zone.cmp(&b.zone),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        SortKey::MachineType => a.machine_type().cmp(&b.machine_type()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::LabelCount => a.labels().len().cmp(&b.labels().len()),
        SortKey::Unknown => Ordering::Equal,
    }
}

/// Stable sort in place
///
/// `None` and [`SortKey::Unknown`] keep insertion order.
pub fn sort_resources(resources: &mut [&Resource], key: Option<SortKey>, direction: SortDirection) {
    let Some(key) = key else {
        return;
    };
    if key == SortKey::Unknown {
        return;
    }

    match direction {
        SortDirection::Asc => resources.sort_by(|a, b| compare_by(key, a, b)),
        SortDirection::Desc => resources.sort_by(|a, b| compare_by(key, a, b).reverse()),
    }
}

/// Partition sorted resources by their value for `label_key`
pub fn group_resources<'a>(sorted: &[&'a Resource], label_key: &str) -> Vec<ResourceGroup<'a>> {
    let mut groups: BTreeMap<String, Vec<&'a Resource>> = BTreeMap::new();
    for resource in sorted {
        let key = resource
            .labels()
            .get(label_key)
            .unwrap_or(UNASSIGNED_GROUP)
            .to_string();
        groups.entry(key).or_default().push(resource);
    }

    groups
        .into_iter()
        .map(|(key, members)| ResourceGroup { key, members })
        .collect()
}

/// Flatten groups into header + member rows, honouring collapse state
pub fn flatten_groups<'a>(
    groups: Vec<ResourceGroup<'a>>,
    collapsed: &BTreeSet<String>,
) -> Vec<ViewRow<'a>> {
    let mut rows = Vec::new();
    for group in groups {
        let is_collapsed = collapsed.contains(&group.key);
        rows.push(ViewRow::Group {
            key: group.key.clone(),
            count: group.members.len(),
            collapsed: is_collapsed,
        });
        if !is_collapsed {
            rows.extend(group.members.into_iter().map(|resource| ViewRow::Item {
                resource,
                group: Some(group.key.clone()),
            }));
        }
    }
    rows
}

/// Slice rows into one page
///
/// Page sizes below one are treated as one.
pub fn paginate<'a>(rows: Vec<ViewRow<'a>>, page: usize, page_size: usize, total_items: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let page = if page == 0 || page > total_pages { 1 } else { page };

    let rows = rows
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        rows,
        page,
        page_size,
        total_pages,
        total_items,
        total_rows,
    }
}

/// Filter, sort, group and paginate in one call
pub fn filter_sort_paginate_group<'a>(
    collection: &'a [Resource],
    config: &FilterConfig,
    request: &ViewRequest,
) -> Page<'a> {
    let filter = CompiledFilter::new(config);
    let mut filtered: Vec<&Resource> = collection.iter().filter(|r| filter.matches(r)).collect();
    sort_resources(&mut filtered, config.sort_key, config.sort_direction);

    let total_items = filtered.len();
    let group_key = request.group_by.as_deref().or(config.group_by.as_deref());

    let rows = match group_key {
        Some(key) => flatten_groups(group_resources(&filtered, key), &request.collapsed_groups),
        None => filtered
            .into_iter()
            .map(|resource| ViewRow::Item {
                resource,
                group: None,
            })
            .collect(),
    };

    paginate(rows, request.page, request.page_size, total_items)
}
