//! Command-line entry point: generate a customer batch, report its
//! aggregates, and optionally export it.
//!
//! ```text
//! kinderdash [count] [seed] [--config <path>] [--out [path]] [--json]
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, Level};

use kinderdash_backend::domain::{
    funnel, generate_kindergartens, metrics, region_distribution, CustomerFilter,
    CustomerTableConfig, CustomerTableService,
};
use kinderdash_backend::storage::{DashboardConfig, KindergartenRepository};
use shared::{FunnelStage, MetricsSummary, RegionCount};

/// Machine-readable batch report for the `--json` flag.
#[derive(Serialize)]
struct BatchSummary {
    count: usize,
    seed: u64,
    metrics: MetricsSummary,
    funnel: Vec<FunnelStage>,
    regions: Vec<RegionCount>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path = PathBuf::from("dashboard.yaml");
    let mut export: Option<Option<PathBuf>> = None;
    let mut json = false;
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = args
                    .get(i)
                    .map(PathBuf::from)
                    .context("--config requires a path")?;
            }
            "--out" => {
                // Path is optional; a timestamped default is used otherwise.
                let next = args.get(i + 1).filter(|a| !a.starts_with("--"));
                if let Some(path) = next {
                    export = Some(Some(PathBuf::from(path)));
                    i += 1;
                } else {
                    export = Some(None);
                }
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                anyhow::bail!(
                    "unknown option {other}\nusage: kinderdash [count] [seed] [--config <path>] [--out [path]] [--json]"
                );
            }
            other => positionals.push(other.to_string()),
        }
        i += 1;
    }

    let config = DashboardConfig::load_or_default(&config_path)?;
    let count = positionals
        .first()
        .map(|s| s.parse::<usize>())
        .transpose()
        .context("count must be an integer")?
        .unwrap_or(config.record_count);
    let seed = positionals
        .get(1)
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed must be an integer")?
        .unwrap_or(config.seed);

    let records = generate_kindergartens(count, seed)?;

    let batch_metrics = metrics(&records);
    let stages = funnel(&records);
    let regions = region_distribution(&records);

    info!(
        "Batch of {} customers: {} closed, {} interested, {} not contacted",
        batch_metrics.total,
        batch_metrics.closed,
        batch_metrics.interested,
        batch_metrics.not_contacted
    );
    for stage in &stages {
        info!("Funnel {}: {}", stage.stage.label(), stage.count);
    }
    if let Some(top) = regions.first() {
        info!("Largest region: {} with {} records", top.full_name, top.count);
    }

    let table = CustomerTableService::with_config(CustomerTableConfig {
        page_size: config.page_size,
    });
    let first_page = table.page(&records, &CustomerFilter::default(), 1);
    info!(
        "Table preview: {} rows on page 1 of {}",
        first_page.customers.len(),
        first_page.page_count
    );

    if let Some(path) = export {
        let path = path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "kindergartens_{}_{}.csv",
                seed,
                Utc::now().format("%Y%m%d")
            ))
        });
        KindergartenRepository::new(&path).save(&records)?;
        info!("Exported batch to {}", path.display());
    }

    if json {
        let summary = BatchSummary {
            count,
            seed,
            metrics: batch_metrics,
            funnel: stages,
            regions,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
