use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::registry::SlotRegistry;

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/slotkeeper/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("slotkeeper").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is within 10..=5000 ms
    /// - Preset slot numbers are positive and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "tick_rate_ms must be between {} and {}, got {}",
                    MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, tick
                ),
            });
        }

        let mut seen = HashSet::new();
        for preset in &self.slots {
            if preset.slot_no <= 0 || preset.slot_no > i64::from(u32::MAX) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Preset slot number {} must be a positive 32-bit integer",
                        preset.slot_no
                    ),
                });
            }
            if !seen.insert(preset.slot_no) {
                return Err(ConfigError::ValidationError {
                    message: format!("Preset slot number {} is listed twice", preset.slot_no),
                });
            }
        }

        Ok(())
    }

    /// Builds the startup registry from the configured presets.
    pub fn build_registry(&self) -> Result<SlotRegistry, ConfigError> {
        let mut registry = SlotRegistry::new();
        for preset in &self.slots {
            // Out-of-range numbers map to 0, which `add` rejects.
            let slot_no = u32::try_from(preset.slot_no).unwrap_or(0);
            registry
                .add(slot_no, preset.covered, preset.ev_charging)
                .map_err(|err| ConfigError::ValidationError {
                    message: format!("Preset slot {}: {}", preset.slot_no, err),
                })?;
        }
        tracing::debug!(count = registry.len(), "Seeded registry from config");
        Ok(registry)
    }
}
