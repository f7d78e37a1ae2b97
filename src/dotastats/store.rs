use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{format_err, Context, Result};
use itertools::Itertools;
use log::{info, warn};

use super::config::Config;

fn config_file_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("config.yaml"))
}

pub fn data_dir() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "dotastats", "dotastats")
        .ok_or_else(|| format_err!("Cannot retrieve project dirs"))?;
    Ok(project_dirs.data_dir().to_owned())
}

/// Loads the config from the data directory, creating a default one on first run.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_file_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    info!("Config file: {}", path.to_string_lossy());
    if !path.exists() {
        info!("Config file does not exist, creating.");
        store_config(path, &Config::default())?;
    }
    let config_file =
        File::open(path).with_context(|| format!("Cannot open {}", path.to_string_lossy()))?;
    let config: Config = serde_yaml::from_reader(config_file)
        .with_context(|| format!("Invalid config file {}", path.to_string_lossy()))?;
    log_roster(&config);
    Ok(config)
}

pub fn store_config(path: &Path, config: &Config) -> Result<()> {
    ensure_dir_created(path)?;
    let config_file = File::create(path)?;
    Ok(serde_yaml::to_writer(config_file, config)?)
}

fn log_roster(config: &Config) {
    let n = config.players.len();
    let player_ids: String = config.players.iter().map(|p| &p.id).join(", ");
    if n == 0 {
        warn!("Loaded {n} players");
    } else {
        info!("Loaded {n} players: {player_ids}");
    }
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", &dir.to_string_lossy()))?;
    }
    Ok(())
}
