mod cli;
mod config;
mod state;

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use harvest_engine::{
    ensure_output_dir, write_manifest, BatchSummary, Harvester, LogProgressSink, ReqwestFetcher,
    TextFileStore,
};
use harvest_log::{harvest_info, harvest_warn, LogDestination};
use log::LevelFilter;

use crate::cli::{Cli, Command};
use crate::config::HarvestConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HarvestConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => HarvestConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let destination = match &config.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    if !harvest_log::initialize(level, destination) {
        eprintln!("warning: logging could not be initialized");
    }

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    match cli.command {
        Command::Links => runtime.block_on(print_links(&config)),
        Command::Run { fresh } => runtime.block_on(run_batch(&config, fresh)),
    }
}

fn build_harvester(config: &HarvestConfig) -> Harvester {
    let fetcher = Arc::new(ReqwestFetcher::new(config.fetch_settings()));
    let store = Arc::new(TextFileStore::new(
        config.output_dir.clone(),
        Arc::new(|| chrono::Utc::now().to_rfc3339()),
    ));
    Harvester::new(fetcher, store)
        .with_politeness(config.politeness())
        .with_max_links(config.max_links)
}

async fn print_links(config: &HarvestConfig) -> anyhow::Result<()> {
    let links = build_harvester(config)
        .gather_links(&config.listing_url, &LogProgressSink)
        .await;

    println!("This is the top {} total article links:", links.len());
    for link in &links {
        println!("{link}");
    }
    Ok(())
}

async fn run_batch(config: &HarvestConfig, fresh: bool) -> anyhow::Result<()> {
    ensure_output_dir(&config.output_dir)
        .with_context(|| format!("preparing {}", config.output_dir.display()))?;

    let mut completed = if fresh {
        BTreeSet::new()
    } else {
        state::load_completed_urls(&config.output_dir)
    };

    harvest_info!(
        "Harvesting {} into {:?}",
        config.listing_url,
        config.output_dir
    );
    let summary = build_harvester(config)
        .run(&config.listing_url, &completed, &LogProgressSink)
        .await;

    completed.extend(summary.saved.iter().map(|entry| entry.url.clone()));
    state::save_completed_urls(&config.output_dir, &completed);

    match write_manifest(&config.output_dir, &summary) {
        Ok(path) => harvest_info!("Manifest written to {:?}", path),
        Err(err) => harvest_warn!("Failed to write manifest: {}", err),
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    println!(
        "{} links found: {} saved, {} skipped, {} failed",
        summary.links_found,
        summary.saved.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    for failure in &summary.failed {
        println!("  failed {}: {}", failure.url, failure.reason);
    }
}
