use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "vishwakarma-tui";
const API_URL_ENV: &str = "VISHWAKARMA_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the projects backend, e.g. "http://localhost:8000"
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Simulated latency before the chat assistant answers
    #[serde(default = "default_chat_reply_delay_ms")]
    pub chat_reply_delay_ms: u64,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_chat_reply_delay_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            chat_reply_delay_ms: default_chat_reply_delay_ms(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

fn app_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR))
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(app_dir()?.join("config.toml"))
    }

    /// Where logs go unless `log_file` says otherwise.
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(app_dir()?.join("vishwakarma.log"))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Self::default_log_path(),
        }
    }

    /// Load config from disk and apply environment overrides. Returns the
    /// default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(&url);
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    fn apply_api_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api_url = url.to_string();
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Write the default config unless a file is already there.
    pub fn ensure_file(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.chat_reply_delay_ms, 1000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://backend:9000\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "http://backend:9000");
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "chat_reply_delay_ms = \"soon\"").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn ensure_file_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(AppConfig::ensure_file(&path).unwrap());
        std::fs::write(&path, "chat_reply_delay_ms = 5\n").unwrap();
        assert!(!AppConfig::ensure_file(&path).unwrap());
        assert_eq!(AppConfig::load_from(&path).unwrap().chat_reply_delay_ms, 5);
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_api_url_override("  ");
        assert_eq!(config.api_url, "http://localhost:8000");
        config.apply_api_url_override(" http://10.0.0.2:8000 ");
        assert_eq!(config.api_url, "http://10.0.0.2:8000");
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/vk.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/vk.log"));
    }
}
