//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::Config;

/// Default configuration content for `xpquest init`
pub const DEFAULT_CONFIG: &str = r#"# XPQuest Configuration
# ======================
#
# Turn your daily habits into quests. Every option below has a default,
# so you only need to keep the lines you change.

[settings]
# Where the state document (xpquest-storage.json) and the daily reset
# marker are kept. Defaults to ~/.xpquest
# data_dir = "/home/me/.xpquest"

# XP reward for `xpquest add` when --xp is not given (1-100)
default_xp_reward = 10

[avatar]
# Edge length in pixels of the square avatar
size = 400
# JPEG quality of the stored avatar (1-100)
quality = 90
"#;

impl Config {
    /// Get the global config directory path (~/.xpquest/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".xpquest")
    }

    /// Get the global config file path (~/.xpquest/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or from the global location when
    /// `path` is None. A missing global file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let global_path = Self::global_config_path();
                if global_path.exists() {
                    Self::from_file(&global_path)
                } else {
                    tracing::debug!("No config at {}, using defaults", global_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Write the documented default config to `path`
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;

        file.write_all(DEFAULT_CONFIG.as_bytes())
            .with_context(|| "Failed to write config content")?;

        Ok(())
    }
}
