use once_cell::sync::Lazy;
use std::{
    fs,
    num::ParseIntError,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::{
    models::{
        Config, ConfigMetadata, ConfigWarnings, CorsConfig, DEFAULT_LOG_LEVEL,
        DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, LoggingConfig, ServerConfig,
    },
    sources::{EnvConfig, FileConfig},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![PathBuf::from("roster.toml"), PathBuf::from("config/roster.toml")]
});

/// Composes a [`Config`] from defaults, an optional TOML file and the
/// environment, in increasing priority.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid server port '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Load `.env`, read the process environment and compose the config.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_from(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose the config against an already gathered environment.
    pub fn load_from(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        let (file_config, config_path) = self.load_file_config(&env)?;
        if config_path.is_none() {
            warnings.push_with_hint(
                "No roster.toml detected; using environment variables and \
                 defaults",
                "Create roster.toml or set ROSTER_CONFIG to customise the \
                 server",
            );
        }

        let config =
            compose_config(file_config.unwrap_or_default(), env, config_path)?;
        if config.cors.allowed_origins.is_empty() {
            warnings.push(
                "CORS allows any origin; set CORS_ALLOWED_ORIGINS to \
                 restrict it",
            );
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let port = match env.server_port {
        Some(raw) => {
            raw.parse::<u16>()
                .map_err(|source| ConfigLoadError::InvalidPort {
                    value: raw.clone(),
                    source,
                })?
        }
        None => file.server.port.unwrap_or(DEFAULT_SERVER_PORT),
    };

    let server = ServerConfig {
        host: env
            .server_host
            .or(file.server.host)
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        port,
    };

    let logging = LoggingConfig {
        level: env
            .log_level
            .or(file.logging.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        dir: env.log_dir.or(file.logging.dir),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file.cors.allowed_origins)
            .unwrap_or_default(),
    };

    Ok(Config {
        server,
        logging,
        cors,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}
