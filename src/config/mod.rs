use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// DeepSeek API key; the `DEEPSEEK_API_KEY` env var takes precedence.
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Append-only CSV usage log. Tilde-expanded at use.
    #[serde(default = "default_event_log")]
    pub event_log: String,
}

fn default_model() -> String {
    "deepseek-chat".into()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_event_log() -> String {
    "~/.headline-spark/event_log.csv".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            event_log: default_event_log(),
        }
    }
}

impl Config {
    /// Load `~/.headline-spark/config.toml`, creating it with defaults on
    /// first run.
    pub fn load_or_init() -> Result<Self> {
        let dir = config_dir()?;
        let path = dir.join("config.toml");

        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut config: Config = toml::from_str(&raw)
                .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
            config.config_path = path;
            config.validate()?;
            Ok(config)
        } else {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let config = Config {
                config_path: path.clone(),
                ..Config::default()
            };
            let rendered =
                toml::to_string_pretty(&config).context("failed to serialize default config")?;
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(config)
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature {} outside 0.0..=2.0",
                self.temperature
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Env var wins over the config file so keys never need to be written
    /// to disk.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn event_log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.event_log).into_owned())
    }
}

fn config_dir() -> Result<PathBuf> {
    let user_dirs = UserDirs::new().context("could not determine home directory")?;
    Ok(user_dirs.home_dir().join(".headline-spark"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = Config {
            temperature: 3.5,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn rejects_empty_model() {
        let config = Config {
            model: "  ".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str("api_key = \"sk-test\"").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn event_log_path_expands_tilde() {
        let config = Config::default();
        let path = config.event_log_path();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
