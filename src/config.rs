//! Game configuration
//!
//! Every tunable has a default matching the classic game, so no config file is
//! needed. A JSON file can override any subset of fields:
//!
//! ```json
//! { "base_speed": 4.5, "automation_threshold": 50 }
//! ```
//!
//! Lookup order: `$JELLYFISH_CONFIG`, then `<config_dir>/jellyfish/config.json`,
//! then built-in defaults. The debug overlay is never read from the file; it is
//! switched on with `DEBUG_JELLYFISH=true`. The logical screen size is fixed
//! and not configurable.

use crate::error::GameError;
use log::info;
use sdl2::pixels::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that enables the debug score overlay
pub const DEBUG_ENV: &str = "DEBUG_JELLYFISH";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "JELLYFISH_CONFIG";

/// Logical screen size the game is laid out for
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,

    /// Slowest fall speed, in pixels per frame
    pub base_speed: f64,
    /// Random extra speed added on top of `base_speed`, in [0, spread)
    pub speed_spread: f64,

    pub min_scale: f64,
    pub scale_spread: f64,

    /// Automation turns on once the score is strictly greater than this
    pub automation_threshold: f64,
    /// How much the automation rate grows when automation turns on
    pub automation_increment: u32,

    /// Background RGB
    pub background: [u8; 3],

    #[serde(skip)]
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "jellyfish".to_string(),
            base_speed: 3.0,
            speed_spread: 5.0,
            min_scale: 0.1,
            scale_spread: 0.2,
            automation_threshold: 100.0,
            automation_increment: 1,
            background: [255, 245, 228],
            debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path).map_err(|e| GameError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| GameError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Resolve and load the config from the process environment
    pub fn load() -> Result<Self, GameError> {
        Self::resolve(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            Self::default_path(),
            std::env::var(DEBUG_ENV).ok().as_deref(),
        )
    }

    /// Pick a config source and apply the debug flag
    ///
    /// An explicit path has to exist; a missing default path means defaults.
    fn resolve(
        explicit: Option<PathBuf>,
        default: Option<PathBuf>,
        debug: Option<&str>,
    ) -> Result<Self, GameError> {
        let mut config = match explicit {
            Some(path) => {
                info!("Loading config from {} (${})", path.display(), CONFIG_ENV);
                Self::load_from_file(&path)?
            }
            None => match default.filter(|p| p.exists()) {
                Some(path) => {
                    info!("Loading config from {}", path.display());
                    Self::load_from_file(&path)?
                }
                None => {
                    info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.debug = debug_enabled(debug);
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jellyfish").join("config.json"))
    }

    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::RGB(r, g, b)
    }
}

/// Only the exact string `true` turns the overlay on
pub fn debug_enabled(value: Option<&str>) -> bool {
    value == Some("true")
}
