//! Configuration management for flipform.
//!
//! Loads configuration from ${FLIPFORM_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::starfield::DEFAULT_STAR_COUNT;

pub mod paths {
    //! Path resolution for flipform configuration and log directories.
    //!
    //! FLIPFORM_HOME resolution order:
    //! 1. FLIPFORM_HOME environment variable (if set)
    //! 2. ~/.config/flipform (default)
    //! 3. ./.flipform when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the flipform home directory.
    pub fn flipform_home() -> PathBuf {
        if let Ok(home) = std::env::var("FLIPFORM_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".flipform"),
            |h| h.join(".config").join("flipform"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        flipform_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        flipform_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of decorative points in the background
    pub star_count: usize,

    /// Duration of each half of the flip transition, in milliseconds
    pub flip_duration_ms: u64,

    /// Length of one twinkle loop, in milliseconds
    pub twinkle_period_ms: u64,

    /// Draw the debug status line at startup
    pub show_debug_status: bool,

    /// Default log filter when FLIPFORM_LOG is not set
    pub log_level: String,
}

impl Config {
    const DEFAULT_FLIP_DURATION_MS: u64 = 400;
    const DEFAULT_TWINKLE_PERIOD_MS: u64 = 3000;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Flip half duration as a `Duration`.
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms.max(1))
    }

    /// Twinkle loop period as a `Duration`.
    pub fn twinkle_period(&self) -> Duration {
        Duration::from_millis(self.twinkle_period_ms.max(1))
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            flip_duration_ms: Self::DEFAULT_FLIP_DURATION_MS,
            twinkle_period_ms: Self::DEFAULT_TWINKLE_PERIOD_MS,
            show_debug_status: false,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}
