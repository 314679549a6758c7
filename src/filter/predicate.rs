// Copyright (c) 2025 - Cowboy AI, Inc.
//! Filter Predicate Evaluator
//!
//! Decides whether a single resource matches a [`FilterConfig`]. Evaluation is
//! pure and per-resource: no state is carried between resources, so callers
//! may short-circuit or reorder freely.
//!
//! [`CompiledFilter`] does the per-query work once (lower-casing the search
//! text, parsing date bounds) so that a full-collection pass does not repeat
//! it for every resource.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{FilterConfig, LabelLogic};
use crate::domain::Resource;

/// Decide whether `resource` matches `config`
pub fn evaluate_filter(resource: &Resource, config: &FilterConfig) -> bool {
    CompiledFilter::new(config).matches(resource)
}

/// A filter configuration prepared for repeated evaluation
#[derive(Debug, Clone)]
pub struct CompiledFilter<'a> {
    config: &'a FilterConfig,
    needle: String,
    date_start: Option<DateTime<Utc>>,
    date_end: Option<DateTime<Utc>>,
}

impl<'a> CompiledFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            config,
            needle: config.search.to_lowercase(),
            date_start: config
                .date_start
                .as_deref()
                .and_then(|raw| parse_date_bound(raw, BoundSide::Start)),
            date_end: config
                .date_end
                .as_deref()
                .and_then(|raw| parse_date_bound(raw, BoundSide::End)),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        self.config
    }

    /// Evaluate every constraint against one resource
    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_search(resource)
            && self.matches_enumerations(resource)
            && self.matches_public_ip(resource)
            && self.matches_dates(resource)
            && self.matches_labels(resource)
    }

    fn matches_search(&self, resource: &Resource) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        resource.name.to_lowercase().contains(&self.needle)
            || resource.id().to_lowercase().contains(&self.needle)
    }

    fn matches_enumerations(&self, resource: &Resource) -> bool {
        let config = self.config;

        if !config.statuses.is_empty() && !config.statuses.contains(&resource.status) {
            return false;
        }
        if !config.types.is_empty() && !config.types.contains(&resource.resource_type) {
            return false;
        }
        if !config.zones.is_empty() && !config.zones.contains(&resource.zone) {
            return false;
        }
        if !config.machine_types.is_empty() {
            match resource.machine_type() {
                Some(machine_type) if config.machine_types.contains(machine_type) => {}
                _ => return false,
            }
        }
        true
    }

    fn matches_public_ip(&self, resource: &Resource) -> bool {
        match self.config.has_public_ip {
            Some(required) => resource.has_public_ip() == required,
            None => true,
        }
    }

    fn matches_dates(&self, resource: &Resource) -> bool {
        if let Some(start) = self.date_start {
            if resource.created_at < start {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if resource.created_at > end {
                return false;
            }
        }
        true
    }

    fn matches_labels(&self, resource: &Resource) -> bool {
        let labels = resource.labels();

        // Unlabeled-only short-circuits the pair constraints entirely.
        if self.config.show_unlabeled_only {
            return labels.is_empty();
        }

        let constraints = &self.config.label_constraints;
        if constraints.is_empty() {
            return true;
        }

        match self.config.label_logic {
            LabelLogic::And => constraints.iter().all(|c| labels.has_label(&c.key, &c.value)),
            LabelLogic::Or => constraints.iter().any(|c| labels.has_label(&c.key, &c.value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundSide {
    Start,
    End,
}

/// Parse a date-range bound leniently
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM[:SS]` (read as UTC) and
/// bare `YYYY-MM-DD` dates. A bare end date covers the whole day. Anything
/// else is treated as no bound at all.
pub(crate) fn parse_date_bound(raw: &str, side: BoundSide) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let naive = match side {
        BoundSide::Start => date.and_hms_opt(0, 0, 0)?,
        BoundSide::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999)?,
    };
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NetworkInterface, ResourceStatus, ResourceType};
    use crate::filter::LabelLogic;
    use chrono::TimeZone;
    use test_case::test_case;

    fn web_vm() -> Resource {
        Resource::builder(
            "vm-100",
            "Prod-Web-01",
            ResourceType::Instance,
            Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
        )
        .zone("us-central1-a")
        .status(ResourceStatus::Running)
        .machine_type("e2-medium")
        .label("env", "prod")
        .label("app", "web")
        .network_interface(NetworkInterface {
            external_ip: Some("34.9.9.9".to_string()),
            ..Default::default()
        })
        .build()
    }

    #[test_case("" ; "empty search")]
    #[test_case("web" ; "lowercase substring of name")]
    #[test_case("PROD-WEB" ; "uppercase substring of name")]
    #[test_case("vm-1" ; "substring of id")]
    fn test_search_matches(search: &str) {
        let config = FilterConfig::new().with_search(search);
        assert!(evaluate_filter(&web_vm(), &config));
    }

    #[test]
    fn test_search_miss() {
        let config = FilterConfig::new().with_search("database");
        assert!(!evaluate_filter(&web_vm(), &config));

        // Whitespace is part of the needle.
        let config = FilterConfig::new().with_search(" web");
        assert!(!evaluate_filter(&web_vm(), &config));
    }

    #[test]
    fn test_set_membership() {
        let resource = web_vm();
        assert!(evaluate_filter(
            &resource,
            &FilterConfig::new()
                .with_status(ResourceStatus::Running)
                .with_status(ResourceStatus::Stopped)
        ));
        assert!(!evaluate_filter(
            &resource,
            &FilterConfig::new().with_type(ResourceType::Disk)
        ));
        assert!(!evaluate_filter(
            &resource,
            &FilterConfig::new().with_zone("europe-west1-b")
        ));
        assert!(evaluate_filter(
            &resource,
            &FilterConfig::new().with_machine_type("e2-medium")
        ));
    }

    #[test]
    fn test_machine_type_filter_excludes_resources_without_one() {
        let bucket = Resource::builder(
            "b-1",
            "assets",
            ResourceType::Bucket,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
        .build();
        let config = FilterConfig::new().with_machine_type("e2-medium");
        assert!(!evaluate_filter(&bucket, &config));
    }

    #[test]
    fn test_public_ip_filter() {
        let resource = web_vm();
        assert!(evaluate_filter(&resource, &FilterConfig::new().with_public_ip(true)));
        assert!(!evaluate_filter(&resource, &FilterConfig::new().with_public_ip(false)));
    }

    #[test_case(Some("2025-06-15"), Some("2025-06-15"), true ; "same day inclusive")]
    #[test_case(Some("2025-06-16"), None, false ; "starts after creation")]
    #[test_case(None, Some("2025-06-14"), false ; "ends before creation")]
    #[test_case(Some("2025-06-15T12:00:00Z"), Some("2025-06-15T12:00:00Z"), true ; "exact timestamp bounds")]
    #[test_case(Some("not-a-date"), Some("soon"), true ; "malformed bounds are absent")]
    #[test_case(Some(""), None, true ; "empty bound is absent")]
    fn test_date_range(start: Option<&str>, end: Option<&str>, expected: bool) {
        let config = FilterConfig::new().with_date_range(start, end);
        assert_eq!(evaluate_filter(&web_vm(), &config), expected);
    }

    #[test]
    fn test_label_logic() {
        let resource = web_vm();

        let and = FilterConfig::new().with_label("env", "prod").with_label("app", "api");
        assert!(!evaluate_filter(&resource, &and));

        let or = and.clone().with_label_logic(LabelLogic::Or);
        assert!(evaluate_filter(&resource, &or));

        let value_mismatch = FilterConfig::new().with_label("env", "PROD");
        assert!(!evaluate_filter(&resource, &value_mismatch));
    }

    #[test]
    fn test_unlabeled_only_overrides_label_constraints() {
        let labeled = web_vm();
        let unlabeled = Resource::builder(
            "d-1",
            "scratch",
            ResourceType::Disk,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
        .build();

        let config = FilterConfig::new().with_label("env", "prod").unlabeled_only();
        assert!(!evaluate_filter(&labeled, &config));
        assert!(evaluate_filter(&unlabeled, &config));
    }

    #[test]
    fn test_parse_date_bound_end_of_day() {
        let end = parse_date_bound("2025-06-15", BoundSide::End).unwrap();
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert!(end > Utc.with_ymd_and_hms(2025, 6, 15, 23, 59, 59).unwrap());

        let local = parse_date_bound("2025-06-15T08:30", BoundSide::Start).unwrap();
        assert_eq!(local, Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap());
    }
}
