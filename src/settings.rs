//! Game settings and tuning
//!
//! Read once at startup from an optional JSON file; never written back.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::browser::DEFAULT_VISIBLE_ROWS;
use crate::error::SettingsError;
use crate::level::LevelParams;

/// Player movement tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Planar speed (units/s)
    pub speed: f32,
    /// Upward velocity applied on jump (units/s)
    pub jump_power: f32,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Lowest height the player can occupy
    pub ground_height: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 7.0,
            jump_power: 12.0,
            gravity: 32.0,
            ground_height: 1.0,
        }
    }
}

/// Chase camera tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Camera position relative to the level root
    pub offset: Vec3,
    /// Initial pitch (degrees)
    pub pitch: f32,
    /// Degrees of yaw per unit of horizontal mouse motion
    pub yaw_sensitivity: f32,
    /// Degrees of pitch per unit of vertical mouse motion
    pub pitch_sensitivity: f32,
    /// Pitch is clamped to ±this (degrees)
    pub pitch_limit: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 2.0, -8.0),
            pitch: 10.0,
            yaw_sensitivity: 45.0,
            pitch_sensitivity: 30.0,
            pitch_limit: 60.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Level generation ===
    pub level: LevelParams,

    // === Sandbox ===
    pub player: PlayerSettings,
    pub camera: CameraSettings,

    // === Display ===
    pub fullscreen: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Rows visible in the course browser
    pub visible_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: LevelParams::default(),
            player: PlayerSettings::default(),
            camera: CameraSettings::default(),
            fullscreen: false,
            show_fps: true,
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.level.validate()?;
        Ok(settings)
    }

    /// Load settings from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }
}
