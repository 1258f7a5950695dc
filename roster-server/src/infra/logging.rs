use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::ChronoLocal, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::infra::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "app.log";
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. With a log
/// directory configured, output goes to `<dir>/app.log` without ANSI
/// colours; otherwise to stdout.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };
    let timer = ChronoLocal::new(LOG_TIME_FORMAT.to_string());

    let (stdout_layer, file_layer) = match &config.dir {
        Some(dir) => {
            let file = open_log_file(dir)?;
            let layer = fmt::layer()
                .with_timer(timer)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (None, Some(layer))
        }
        None => (Some(fmt::layer().with_timer(timer)), None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(())
}

/// Parse a configured level such as `info` or `roster_server=debug,warn`.
pub fn level_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level '{level}'"))
}

pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

fn open_log_file(dir: &Path) -> anyhow::Result<fs::File> {
    fs::create_dir_all(dir).with_context(|| {
        format!("failed to create log directory {}", dir.display())
    })?;
    let path = log_file_path(dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
