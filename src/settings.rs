//! Game settings and preferences
//!
//! Stored as JSON: a file next to the executable's working directory on
//! native, LocalStorage in the browser.

use serde::{Deserialize, Serialize};

use crate::consts::{TARGET_FPS, WINDOW_TITLE};
use crate::sim::Ruleset;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which iteration of the game to play
    pub ruleset: Ruleset,
    /// Show FPS counter
    pub show_fps: bool,
    /// Window title (native only)
    pub window_title: String,
    /// Redraw rate of the native loop; the browser paces itself
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::default(),
            show_fps: false,
            window_title: WINDOW_TITLE.to_string(),
            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "axe_game_settings";
    /// Settings file (native only)
    #[allow(dead_code)]
    const FILE_NAME: &'static str = "axe_game.json";

    /// Create settings for a ruleset, everything else default
    pub fn with_ruleset(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            ..Self::default()
        }
    }

    /// Seconds between redraws, never faster than 1000 fps
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.target_fps.clamp(1, 1000) as f32
    }

    pub fn from_json(json: &str) -> Result<Self, crate::AxeGameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, crate::AxeGameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from `axe_game.json` in the working directory, falling
    /// back to defaults when it is missing or malformed
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::path::Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using default settings", Self::FILE_NAME);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, crate::AxeGameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let path = std::path::Path::new(Self::FILE_NAME);
        match self.save_to(path) {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Could not save settings to {}: {e}", path.display()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), crate::AxeGameError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
