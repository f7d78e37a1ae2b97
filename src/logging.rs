use anyhow::{Context, Result};
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};
use log::error;

use super::dotastats::store::data_dir;

const DEFAULT_LOG_SPEC: &str = "warn,dotastats=debug,rankengine=debug,dotastats_model=debug";

/// `RUST_LOG` takes precedence over the default filter.
pub fn init() -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(DEFAULT_LOG_SPEC)
        .context("log config text")?
        .log_to_file(
            FileSpec::default()
                .directory(data_dir()?.join("logs"))
                .basename("dotastats"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .duplicate_to_stderr(Duplicate::Info)
        .start()
        .context("log init")?;

    let orig_hook = std::panic::take_hook();
    let logger_for_panic = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        // log, flush and let the default handler report it
        error!("Panic: {panic_info}");
        logger_for_panic.flush();
        orig_hook(panic_info);
        std::process::exit(1);
    }));
    Ok(logger)
}
