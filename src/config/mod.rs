//! Configuration for XPQuest
//!
//! Read from `~/.xpquest/config.toml`. Every field has a default, so a
//! missing or partial file is fine.

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::avatar::{AvatarOptions, DEFAULT_AVATAR_QUALITY, DEFAULT_AVATAR_SIZE};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub avatar: AvatarSettings,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the state document and reset marker live (defaults to ~/.xpquest)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// XP reward used by `add` when `--xp` is not given
    #[serde(default = "default_xp_reward")]
    pub default_xp_reward: u32,
}

fn default_xp_reward() -> u32 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_xp_reward: default_xp_reward(),
        }
    }
}

/// Avatar output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarSettings {
    /// Edge length in pixels of the stored square avatar
    #[serde(default = "default_avatar_size")]
    pub size: u32,

    /// JPEG quality (1-100)
    #[serde(default = "default_avatar_quality")]
    pub quality: u8,
}

fn default_avatar_size() -> u32 {
    DEFAULT_AVATAR_SIZE
}

fn default_avatar_quality() -> u8 {
    DEFAULT_AVATAR_QUALITY
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            size: default_avatar_size(),
            quality: default_avatar_quality(),
        }
    }
}

impl AvatarSettings {
    pub fn options(&self) -> AvatarOptions {
        AvatarOptions {
            size: self.size.max(1),
            quality: self.quality.clamp(1, 100),
        }
    }
}

impl Config {
    /// Resolve the data directory: explicit override, then config, then ~/.xpquest
    pub fn data_dir(&self, override_dir: Option<&PathBuf>) -> PathBuf {
        override_dir
            .cloned()
            .or_else(|| self.settings.data_dir.clone())
            .unwrap_or_else(Self::global_config_dir)
    }
}
