//! Sandbox world state
//!
//! Everything a level needs between ticks: the generated layout, its scene
//! objects, the player body and the camera.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_POSITION;
use crate::error::ParameterError;
use crate::level::{LevelLayout, LevelParams, SceneObject, generate};
use crate::settings::{CameraSettings, PlayerSettings};

/// Player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub y_velocity: f32,
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            y_velocity: 0.0,
            grounded: false,
        }
    }
}

/// Camera placement (angles in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
}

impl Camera {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            position: settings.offset,
            pitch: settings.pitch,
            yaw: 0.0,
        }
    }

    /// Apply mouse motion, clamping pitch
    pub fn look(&mut self, delta_x: f32, delta_y: f32, settings: &CameraSettings) {
        self.yaw += delta_x * settings.yaw_sensitivity;
        self.pitch = (self.pitch - delta_y * settings.pitch_sensitivity)
            .clamp(-settings.pitch_limit, settings.pitch_limit);
    }
}

/// A playable course instance
#[derive(Debug, Clone)]
pub struct World {
    pub course_name: String,
    pub layout: LevelLayout,
    /// Static geometry for the host engine
    pub objects: Vec<SceneObject>,
    pub player: Player,
    pub camera: Camera,
    pub player_settings: PlayerSettings,
    pub camera_settings: CameraSettings,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Generate the course layout and place the player at spawn
    pub fn enter(
        course_name: &str,
        params: &LevelParams,
        player_settings: PlayerSettings,
        camera_settings: CameraSettings,
    ) -> Result<Self, ParameterError> {
        let layout = generate(course_name, params)?;
        let objects = layout.scene_objects();
        log::info!(
            "Entered '{}' (seed {:#018x}, {} objects)",
            course_name,
            layout.seed.0,
            objects.len()
        );

        Ok(Self {
            course_name: course_name.to_string(),
            layout,
            objects,
            player: Player::default(),
            camera: Camera::from_settings(&camera_settings),
            player_settings,
            camera_settings,
            time_ticks: 0,
        })
    }

    /// Put the player back at spawn and restore the camera
    pub fn reset(&mut self) {
        self.player = Player::default();
        self.camera = Camera::from_settings(&self.camera_settings);
        log::debug!("Reset player in '{}'", self.course_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_builds_geometry() {
        let world = World::enter(
            "Bob-omb Islands",
            &LevelParams::default(),
            PlayerSettings::default(),
            CameraSettings::default(),
        )
        .unwrap();
        assert_eq!(world.layout.cells.len(), 400);
        assert_eq!(world.objects, world.layout.scene_objects());
        assert_eq!(world.player.position, SPAWN_POSITION);
        assert_eq!(world.camera.position, Vec3::new(0.0, 2.0, -8.0));
    }

    #[test]
    fn test_enter_rejects_bad_params() {
        let result = World::enter(
            "Bob-omb Islands",
            &LevelParams::new(-1, 2.0, 0.7, 0.2),
            PlayerSettings::default(),
            CameraSettings::default(),
        );
        assert!(matches!(result, Err(ParameterError::GridSize(-1))));
    }

    #[test]
    fn test_camera_pitch_clamped() {
        let settings = CameraSettings::default();
        let mut camera = Camera::from_settings(&settings);
        camera.look(1.0, -10.0, &settings);
        assert_eq!(camera.pitch, 60.0);
        assert_eq!(camera.yaw, 45.0);
        camera.look(0.0, 10.0, &settings);
        assert_eq!(camera.pitch, -60.0);
    }
}
