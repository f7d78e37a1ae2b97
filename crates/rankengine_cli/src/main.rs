use std::error::Error;
use std::io::Write as _;

use clap::Parser;
use clio::{Input, Output};
use dotastats_model::stats::PlayerStats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rankengine::{RankEngine, RankEngineOptions};
use serde::Deserialize;

/// CLI for ranking players offline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File containing player stats (YAML or JSON list)
    #[clap(long, short, value_parser, default_value = "-")]
    input: Input,

    /// File containing engine options
    #[clap(long, value_parser)]
    options_file: Option<Input>,

    /// Seed for the last place phrase
    #[clap(long)]
    seed: Option<u64>,

    /// File to write output
    #[clap(long, short, value_parser, default_value = "-")]
    output: Output,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatsInput {
    List(Vec<PlayerStats>),
    Wrapped { players: Vec<PlayerStats> },
}

impl StatsInput {
    fn into_players(self) -> Vec<PlayerStats> {
        match self {
            StatsInput::List(players) | StatsInput::Wrapped { players } => players,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = Args::parse();
    let options: RankEngineOptions = match args.options_file {
        Some(f) => serde_yaml::from_reader(f)?,
        None => Default::default(),
    };
    let input: StatsInput = serde_yaml::from_reader(args.input)?;

    let engine = RankEngine::new(options);
    let ranked = engine.rank(input.into_players());
    if ranked.is_empty() {
        return Ok(());
    }

    let name_col_width = ranked.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let medal_col_width = ranked
        .iter()
        .map(|r| r.medal.label.chars().count())
        .max()
        .unwrap_or(0);
    for (position, record) in ranked.iter().enumerate() {
        writeln!(
            args.output,
            "{:>2}. {:<name_col_width$} {:<medal_col_width$} {:>5}% ({} matches)",
            position + 1,
            record.name,
            record.medal.label,
            record.win_rate.to_string(),
            record.total_matches()
        )?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    if let Some(last) = engine.last_place(&ranked, &mut rng) {
        writeln!(args.output, "\n{}: {}", last.player.name, last.phrase)?;
    }
    Ok(())
}
