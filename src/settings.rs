//! Game settings
//!
//! Loaded from a JSON file next to the binary; every field has a default so a
//! partial (or missing) file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TEMPO;
use crate::sim::SpriteFootprint;
use crate::{Error, Result, persistence};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "meteor-dodge.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the lane RNG and the star layout
    pub seed: u64,
    /// Ticks per song step
    pub tempo: u16,
    /// Display refresh rate for the native clock
    pub frame_rate: u32,
    /// Play the theme
    pub music: bool,
    /// Meteor hit rectangle around each meteor position
    pub hitbox: SpriteFootprint,
    /// Where the leaderboard is kept (none = not persisted)
    pub highscore_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 1,
            tempo: DEFAULT_TEMPO,
            frame_rate: 60,
            music: true,
            hitbox: SpriteFootprint::default(),
            highscore_path: Some(PathBuf::from("meteor-dodge-scores.json")),
        }
    }
}

impl Settings {
    /// Load from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let settings = match persistence::load_json::<Settings>(path)? {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            None => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Save to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        persistence::save_json(path, self)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values the game loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tempo == 0 {
            return Err(Error::InvalidSetting("tempo must be at least 1".into()));
        }
        if self.frame_rate == 0 {
            return Err(Error::InvalidSetting("frame_rate must be at least 1".into()));
        }
        let fp = &self.hitbox;
        if fp.left < 0 || fp.top < 0 || fp.right < 0 || fp.bottom < 0 {
            return Err(Error::InvalidSetting(format!("hitbox insets must not be negative: {fp:?}")));
        }
        Ok(())
    }
}
