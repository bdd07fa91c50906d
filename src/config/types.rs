use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Slots added to the registry at startup.
    #[serde(default)]
    pub slots: Vec<SlotPreset>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the TUI. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// A slot to add before the first user command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlotPreset {
    pub slot_no: i64,
    #[serde(default)]
    pub covered: bool,
    #[serde(default)]
    pub ev_charging: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LoggingConfig {
    /// Configured log file, or `slotkeeper/slotkeeper.log` under the cache dir.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
            cache_dir.join("slotkeeper").join("slotkeeper.log")
        })
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
