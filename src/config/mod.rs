use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

const APP_NAME: &str = "games-hub";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL or path of the catalog JSON
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub config_version: u32,
}

fn default_catalog() -> String {
    "games.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    800.0
}

fn current_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            config_version: current_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, writing defaults there if nothing exists yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)?;

        match toml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                if config.config_version < current_config_version() {
                    config = Self::migrate_config(config);
                    config.save_to(path)?;
                }
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config: {}. Using defaults and merging.", e);
                let mut config = Self::default();

                if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                    if let Some(table) = value.as_table() {
                        if let Some(catalog) = table.get("catalog").and_then(|v| v.as_str()) {
                            config.catalog = catalog.to_string();
                        }
                        if let Some(level) = table.get("log_level").and_then(|v| v.as_str()) {
                            config.log_level = level.to_string();
                        }
                    }
                }

                config.validate()?;
                config.save_to(path)?;
                Ok(config)
            }
        }
    }

    /// Migrate config from older versions
    fn migrate_config(mut config: Config) -> Self {
        let target_version = current_config_version();

        log::info!(
            "Migrating config from v{} to v{}",
            config.config_version,
            target_version
        );

        // v0 files predate the timeout setting and may carry 0 there
        if config.config_version < 1 && config.request_timeout_secs == 0 {
            config.request_timeout_secs = default_request_timeout_secs();
        }

        config.config_version = target_version;
        config
    }

    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if self.catalog.trim().is_empty() {
            return Err(Error::Config("catalog source must not be empty".to_string()));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(Error::Config(format!(
                "Invalid request_timeout_secs: {}. Must be between 1 and 300",
                self.request_timeout_secs
            )));
        }

        // Negated so NaN fails too
        if !(self.window_width >= 640.0 && self.window_height >= 480.0)
            || !self.window_width.is_finite()
            || !self.window_height.is_finite()
        {
            return Err(Error::Config(format!(
                "Invalid window size {}x{}, minimum is 640x480",
                self.window_width, self.window_height
            )));
        }

        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
