use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Review corpus file. Relative paths are also resolved under `data/`.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Decimal places for the displayed rating.
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u8,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("restaurantes.txt")
}

fn default_display_decimals() -> u8 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            dataset_path: default_dataset_path(),
            display_decimals: default_display_decimals(),
            observability: ObservabilityConfig::default(),
        }
    }
}

// ── Observability ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load `~/.paladar/config.toml`, writing the defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let paladar_dir = home.join(".paladar");
        let config_path = paladar_dir.join("config.toml");

        if !paladar_dir.exists() {
            fs::create_dir_all(&paladar_dir).context("Failed to create .paladar directory")?;
        }

        if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            // Set computed path that is skipped during serialization
            config.config_path.clone_from(&config_path);
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, contents).context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_decimals > 6 {
            return Err(ConfigError::Validation(format!(
                "display_decimals must be at most 6, got {}",
                self.display_decimals
            )));
        }
        match self.observability.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "unknown log level '{other}'"
            ))),
        }
    }
}
