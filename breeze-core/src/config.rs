use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::cache::DEFAULT_TTL_MS;

/// Settings the controller is constructed with. No globals: the hosting
/// shell builds this once and passes it in.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// OpenWeatherMap API key.
    pub api_key: String,
    /// Cache time-to-live in milliseconds.
    pub cache_ttl_ms: i64,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "breeze", "breeze")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Build the controller configuration, requiring a stored API key.
    pub fn widget_config(&self) -> Result<WidgetConfig> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `breeze configure` and enter your OpenWeatherMap API key."
            )
        })?;

        Ok(WidgetConfig { api_key, cache_ttl_ms: DEFAULT_TTL_MS })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_config_errors_when_key_not_set() {
        let cfg = Config::default();
        let err = cfg.widget_config().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `breeze configure`"));
    }

    #[test]
    fn widget_config_carries_key_and_default_ttl() {
        let cfg = Config { api_key: Some("OPEN_KEY".into()) };

        let widget = cfg.widget_config().expect("widget config must build");
        assert_eq!(widget.api_key, "OPEN_KEY");
        assert_eq!(widget.cache_ttl_ms, 60 * 60 * 1000);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = Config { api_key: Some("OPEN_KEY".into()) };

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&text).expect("parse");

        assert_eq!(parsed.api_key.as_deref(), Some("OPEN_KEY"));
    }
}
