use serde::Deserialize;
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileCorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

/// Configuration values read from the process environment.
///
/// Values are kept raw; parsing and validation happen when the loader
/// composes the final [`Config`](super::Config).
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<String>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var("ROSTER_CONFIG").map(PathBuf::from),
            server_host: non_empty_var("SERVER_HOST"),
            server_port: non_empty_var("SERVER_PORT"),
            log_level: non_empty_var("LOG_LEVEL"),
            log_dir: non_empty_var("LOG_DIR").map(PathBuf::from),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|raw| parse_csv(&raw)),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

pub(crate) fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_skips_blank_entries() {
        assert_eq!(
            parse_csv(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn file_config_sections_are_optional() {
        let parsed: FileConfig =
            toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(parsed.server.port, Some(8080));
        assert!(parsed.server.host.is_none());
        assert!(parsed.logging.level.is_none());
        assert!(parsed.cors.allowed_origins.is_none());
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("[server]\nprot = 1\n").is_err());
    }
}
