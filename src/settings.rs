//! Game settings and preferences
//!
//! Persisted as JSON next to the binary's working directory. Grid size and
//! movement speed are fixed and not part of the settings.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw grid lines under the board
    pub show_grid: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Host ===
    /// Fixed RNG seed for reproducible runs (random when unset)
    pub seed: Option<u64>,
    /// Frames per second the host loop aims for
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_grid: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "snack_settings.json";

    /// Parse settings, clamping out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self.target_fps = self.target_fps.clamp(10, 240);
        self
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a file; failures are logged, not fatal
    pub fn save_to(&self, path: &Path) {
        let result = self
            .to_json()
            .map_err(io::Error::from)
            .and_then(|json| fs::write(path, json));

        match result {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
        }
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.show_grid);
        assert!(!settings.muted);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.sfx_volume, 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "show_grid": false, "seed": 7 }"#).unwrap();
        assert!(!settings.show_grid);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "sfx_volume": -1.0, "target_fps": 1 }"#)
                .unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
        assert_eq!(settings.target_fps, 10);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }


    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("snack_settings_{}.json", std::process::id()));
        let settings = Settings {
            muted: true,
            seed: Some(99),
            ..Default::default()
        };

        settings.save_to(&path);
        let loaded = Settings::load_from(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("snack_settings_does_not_exist.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
