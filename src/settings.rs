//! Host and presentation preferences
//!
//! Persisted as JSON: LocalStorage in the browser, a file on native.
//! Nothing here changes the game rules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;
use crate::sim::Arena;

/// Errors loading or saving a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Host loop ===
    /// Simulation ticks per second of wall-clock time
    pub ticks_per_second: u32,

    // === Headless runner ===
    /// Arena used when there is no render surface
    pub headless_arena: Arena,
    /// Give up after this many ticks if nobody has won
    pub headless_max_ticks: u64,

    // === Autoplay ===
    pub autoplay_seed: u64,
    /// Autopilot tracking gain (0-1)
    pub autoplay_reaction: f32,

    // === Presentation ===
    pub background_color: String,
    pub foreground_color: String,
    pub ball_color: String,
    /// Draw the dashed center line
    pub show_net: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,

            headless_arena: Arena::default(),
            headless_max_ticks: 30_000,

            autoplay_seed: 7,
            autoplay_reaction: 0.35,

            background_color: "#7f4bd1".to_string(),
            foreground_color: "white".to_string(),
            ball_color: "#ffff00".to_string(),
            show_net: true,
        }
    }
}

impl Settings {
    /// Environment variable naming the native settings file
    pub const PATH_ENV: &'static str = "PING_A_PONG_SETTINGS";
    /// Native settings file used when the variable is unset
    pub const DEFAULT_PATH: &'static str = "ping_a_pong.json";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ping_a_pong_settings";

    /// Length of one simulation tick in seconds
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write settings to a JSON file
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Native settings file location
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Read settings from `path`, writing the defaults there first if the file
    /// does not exist yet
    pub fn load_or_create(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            return Self::from_path(path);
        }
        let settings = Self::default();
        settings.save_to(path)?;
        log::info!("Wrote default settings to {}", path.display());
        Ok(settings)
    }

    /// Load settings from disk, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = Self::path();
        match Self::load_or_create(&path) {
            Ok(settings) => {
                log::info!("Settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    ///
    /// Stores the defaults when nothing has been saved yet.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(storage) = Self::storage() else {
            log::info!("No LocalStorage, using default settings");
            return Self::default();
        };

        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                Err(e) => log::warn!("{e}; using default settings"),
            },
            Ok(None) => {
                let settings = Self::default();
                if let Err(e) = settings.save() {
                    log::warn!("Could not store default settings: {:?}", e);
                }
                return settings;
            }
            Err(e) => log::warn!("LocalStorage read failed: {:?}", e),
        }

        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), wasm_bindgen::JsValue> {
        let storage = Self::storage().ok_or("no LocalStorage")?;
        let json = self
            .to_json()
            .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
        storage.set_item(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ping_a_pong_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ticks_per_second, 30);
        assert!((settings.sim_dt() - 1.0 / 30.0).abs() < 1e-6);
        assert_eq!(settings.headless_arena, Arena::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "ticks_per_second": 60, "show_net": false }"#)
            .expect("valid settings");
        assert_eq!(settings.ticks_per_second, 60);
        assert!(!settings.show_net);
        assert_eq!(settings.ball_color, "#ffff00");
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let settings = Settings {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert_eq!(settings.sim_dt(), 1.0);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::from_path(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_reload_file() {
        let path = temp_path("saved");
        let settings = Settings {
            autoplay_seed: 99,
            headless_max_ticks: 10,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::from_path(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let path = temp_path("created");
        let _ = std::fs::remove_file(&path);

        let created = Settings::load_or_create(&path).unwrap();
        assert_eq!(created, Settings::default());
        assert!(path.exists());

        // An existing file is read, not overwritten
        let edited = Settings {
            show_net: false,
            ..Default::default()
        };
        edited.save_to(&path).unwrap();
        let loaded = Settings::load_or_create(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, edited);
    }

    #[test]
    fn test_load_or_create_reports_unwritable_path() {
        let path = temp_path("no_such_dir").join("settings.json");
        let err = Settings::load_or_create(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
