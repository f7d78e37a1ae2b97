use anyhow::Result;
use chrono::Local;
use dotastats_model::stats::PlayerStats;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rankengine::RankEngine;

use collect::{collect_stats, HttpStatsSource};
use config::Config;
use messages::Report;

pub mod collect;
pub mod config;
pub mod messages;
pub mod opendota;
pub mod steam;
pub mod store;
pub mod webhook;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Log the rendered payload instead of posting it.
    pub dry_run: bool,
    pub seed: Option<u64>,
}

/// One full report: collect, rank, render, deliver.
pub async fn run(config: &Config, options: &RunOptions) -> Result<()> {
    let roster = config.roster();
    info!("Building report for {} players", roster.len());
    let source = HttpStatsSource::new(config)?;
    let stats = collect_stats(&source, &roster, &config.fallback_name_prefix).await;
    let report = build_report(config, stats, options.seed);

    if options.dry_run {
        info!(
            "Dry run, report not sent:\n{}",
            serde_json::to_string_pretty(&report)?
        );
        return Ok(());
    }
    webhook::deliver(&config.webhook_url, &report, config.webhook_timeout()).await
}

pub fn build_report(config: &Config, stats: Vec<PlayerStats>, seed: Option<u64>) -> Report {
    let engine = RankEngine::new(config.rank_engine_options());
    let ranked = engine.rank(stats);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let last_place = engine.last_place(&ranked, &mut rng);
    if let Some(last_place) = &last_place {
        info!("Last place: {}", last_place.player.name);
    }
    messages::stats_report(&ranked, last_place.as_ref(), &Local::now())
}
