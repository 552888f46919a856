//! Shell configuration

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheHuntConfig {
    /// Directory holding the locally stored user
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Keep the signed-in user across restarts
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,

    /// Simulated search latency in milliseconds
    #[serde(default = "default_search_latency_ms")]
    pub search_latency_ms: u64,

    /// Simulated sign-in latency in milliseconds
    #[serde(default = "default_auth_latency_ms")]
    pub auth_latency_ms: u64,

    /// Maximum number of search history entries kept per session; must be
    /// positive
    #[serde(default)]
    pub history_limit: Option<NonZeroUsize>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("nichehunt"))
        .unwrap_or_else(|| PathBuf::from(".nichehunt"))
}

fn default_persist_session() -> bool {
    true
}

fn default_search_latency_ms() -> u64 {
    niche_search::DEFAULT_SEARCH_LATENCY_MS
}

fn default_auth_latency_ms() -> u64 {
    auth::DEFAULT_AUTH_LATENCY_MS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for NicheHuntConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist_session: default_persist_session(),
            search_latency_ms: default_search_latency_ms(),
            auth_latency_ms: default_auth_latency_ms(),
            history_limit: None,
            log_level: default_log_level(),
        }
    }
}

impl NicheHuntConfig {
    /// Load configuration from an optional config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config_path = Self::find_config_file();
        Self::load_from(config_path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build configuration from defaults, then the config file, then the
    /// environment (env takes precedence)
    pub fn load_from(
        config_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                toml::from_str::<NicheHuntConfig>(&contents)?
            }
            None => Self::default(),
        };

        if let Some(dir) = env("NICHEHUNT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(val) = env("NICHEHUNT_PERSIST_SESSION") {
            config.persist_session = parse_env("NICHEHUNT_PERSIST_SESSION", &val)?;
        }

        if let Some(val) = env("NICHEHUNT_SEARCH_LATENCY_MS") {
            config.search_latency_ms = parse_env("NICHEHUNT_SEARCH_LATENCY_MS", &val)?;
        }

        if let Some(val) = env("NICHEHUNT_AUTH_LATENCY_MS") {
            config.auth_latency_ms = parse_env("NICHEHUNT_AUTH_LATENCY_MS", &val)?;
        }

        if let Some(val) = env("NICHEHUNT_HISTORY_LIMIT") {
            config.history_limit = Some(parse_env("NICHEHUNT_HISTORY_LIMIT", &val)?);
        }

        if let Some(level) = env("NICHEHUNT_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut locations = vec![PathBuf::from("nichehunt.toml")];
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("nichehunt").join("config.toml"));
        }

        locations.into_iter().find(|p| p.exists())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = NicheHuntConfig::load_from(None, env_from(&[])).unwrap();
        assert_eq!(config.search_latency_ms, 800);
        assert_eq!(config.auth_latency_ms, 600);
        assert_eq!(config.history_limit, None);
        assert!(config.persist_session);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let config = NicheHuntConfig::load_from(
            None,
            env_from(&[
                ("NICHEHUNT_DATA_DIR", "/tmp/nichehunt-test"),
                ("NICHEHUNT_PERSIST_SESSION", "false"),
                ("NICHEHUNT_SEARCH_LATENCY_MS", "0"),
                ("NICHEHUNT_HISTORY_LIMIT", "10"),
                ("NICHEHUNT_LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/nichehunt-test"));
        assert!(!config.persist_session);
        assert_eq!(config.search_latency_ms, 0);
        assert_eq!(config.auth_latency_ms, 600);
        assert_eq!(config.history_limit, NonZeroUsize::new(10));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_env_value() {
        let err = NicheHuntConfig::load_from(
            None,
            env_from(&[("NICHEHUNT_SEARCH_LATENCY_MS", "fast")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "NICHEHUNT_SEARCH_LATENCY_MS",
                ..
            }
        ));
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nichehunt.toml");
        std::fs::write(
            &path,
            "search_latency_ms = 100\nauth_latency_ms = 50\nhistory_limit = 5\n",
        )
        .unwrap();

        let config = NicheHuntConfig::load_from(
            Some(&path),
            env_from(&[("NICHEHUNT_AUTH_LATENCY_MS", "0")]),
        )
        .unwrap();

        assert_eq!(config.search_latency_ms, 100);
        assert_eq!(config.auth_latency_ms, 0);
        assert_eq!(config.history_limit, NonZeroUsize::new(5));
        assert!(config.persist_session);
    }

    #[test]
    fn test_zero_history_limit_is_rejected() {
        let err = NicheHuntConfig::load_from(None, env_from(&[("NICHEHUNT_HISTORY_LIMIT", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "NICHEHUNT_HISTORY_LIMIT",
                ..
            }
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nichehunt.toml");
        std::fs::write(&path, "history_limit = 0\n").unwrap();

        let err = NicheHuntConfig::load_from(Some(&path), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nichehunt.toml");
        std::fs::write(&path, "search_latency_ms = \"soon\"").unwrap();

        let err = NicheHuntConfig::load_from(Some(&path), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
