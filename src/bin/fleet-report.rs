// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fleet Report
//!
//! Loads a resource collection from JSON, applies an optional filter and
//! prints facet counts plus one view page as JSON.
//!
//! Run with: cargo run --bin fleet-report -- <resources.json> [filter.json] [page]
//!
//! Environment:
//! - `FLEET_PAGE_SIZE`, `FLEET_SORT_KEY`, `FLEET_SORT_DIRECTION` view defaults
//! - `RUST_LOG` log filter (logs go to stderr)

use anyhow::{bail, Context, Result};
use fleet_governance::{
    filter_sort_paginate_group, CloudLabelValidator, FilterConfig, GovernanceConfig,
    InMemoryResourceStore, LabelingService, ResourceStore, ViewRequest,
};
use std::sync::Arc;
use tracing::info;

/// Command-line arguments
#[derive(Debug)]
struct ReportArgs {
    resources_path: String,
    filter_path: Option<String>,
    page: usize,
}

impl ReportArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let Some(resources_path) = args.next() else {
            bail!("usage: fleet-report <resources.json> [filter.json] [page]");
        };
        let filter_path = args.next().filter(|path| path != "-");
        let page = match args.next() {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("page must be a positive integer, got {:?}", raw))?,
            None => 1,
        };
        Ok(Self {
            resources_path,
            filter_path,
            page,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ReportArgs::parse(std::env::args().skip(1))?;
    let config = GovernanceConfig::from_env().context("Invalid FLEET_* configuration")?;

    let raw = tokio::fs::read_to_string(&args.resources_path)
        .await
        .with_context(|| format!("Failed to read {}", args.resources_path))?;
    let store = InMemoryResourceStore::from_json(&raw).context("Failed to load resources")?;

    let filter: FilterConfig = match &args.filter_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("Invalid filter config in {}", path))?
        }
        None => FilterConfig::default(),
    };

    let service = LabelingService::new(store, Arc::new(CloudLabelValidator::default()), config);
    let filter = service.with_default_sort(filter);
    let facets = service.facets(&filter).await?;

    let collection = service.store().list().await?;
    let mut request = ViewRequest::from_config(service.config());
    request.page = args.page;
    let page = filter_sort_paginate_group(&collection, &filter, &request);

    info!(
        resources = collection.len(),
        matched = page.total_items,
        page = page.page,
        total_pages = page.total_pages,
        "Report built"
    );

    let report = serde_json::json!({
        "facets": facets,
        "page": page,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
