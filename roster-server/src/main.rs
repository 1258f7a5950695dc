//! # Roster Server
//!
//! Serves a fixed user directory at `GET /`, optionally sorted through the
//! `sort` and `order` query parameters.
//!
//! ## Configuration
//!
//! Settings are read from `roster.toml` (or the file named by `--config` /
//! `ROSTER_CONFIG`), then from the environment (`SERVER_HOST`,
//! `SERVER_PORT`, `LOG_LEVEL`, `LOG_DIR`, `CORS_ALLOWED_ORIGINS`), then from
//! the command line.

use anyhow::Context;
use clap::Parser;
use roster_core::{UserDirectory, UserListService};
use roster_server::{
    create_app,
    infra::{
        app_state::AppState,
        config::{Config, ConfigLoad, ConfigLoader},
        logging,
    },
};
use std::{path::PathBuf, sync::Arc};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "roster-server")]
#[command(about = "HTTP server listing users with validated sorting")]
struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Log level or filter directive (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Directory receiving app.log (overrides config)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();
    let config = load_runtime_config(&args)?;
    run_server(config).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Arc<Config>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    apply_overrides(&mut config, args);

    logging::init_tracing(&config.logging)
        .context("failed to initialise logging")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => warn!(
                message = %warning.message,
                hint = %hint,
                "configuration warning"
            ),
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
    if let Some(dir) = &config.logging.dir {
        info!(
            path = %logging::log_file_path(dir).display(),
            "writing logs to file"
        );
    }

    Ok(Arc::new(config))
}

fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(level) = args.log_level.clone() {
        config.logging.level = level;
    }
    if let Some(dir) = args.log_dir.clone() {
        config.logging.dir = Some(dir);
    }
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let users = Arc::new(UserListService::new(UserDirectory::seeded()));
    info!(users = users.directory().len(), "user directory loaded");

    let state = AppState::new(users, Arc::clone(&config));
    let router = create_app(state);

    let listener = tokio::net::TcpListener::bind((
        config.server.host.as_str(),
        config.server.port,
    ))
    .await
    .with_context(|| {
        format!(
            "failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?;

    info!("Starting Roster server (HTTP) on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
