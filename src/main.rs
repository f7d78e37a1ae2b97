use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crate::dotastats::{store, RunOptions};
use crate::utils::print_err;

mod dotastats;
mod logging;
mod utils;

/// Posts Dota 2 stats of a team to a Discord channel
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the one in the data directory
    #[arg(long, env = "DOTASTATS_CONFIG")]
    config: Option<PathBuf>,

    /// Log the Discord payload instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Seed for the last place phrase
    #[arg(long)]
    seed: Option<u64>,
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => store::load_config_from(path)?,
        None => store::load_config()?,
    };
    config.apply_env_overrides(|k| std::env::var(k).ok());
    let options = RunOptions {
        dry_run: args.dry_run,
        seed: args.seed,
    };
    dotastats::run(&config, &options).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let logger = match logging::init() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    let result = run(args).await;
    if let Err(e) = &result {
        print_err(e);
    }
    logger.flush();
    if result.is_err() {
        std::process::exit(1);
    }
}
