//! Fixed timestep simulation tick
//!
//! Advances the sandbox player from a per-tick input snapshot.

use glam::{Vec2, Vec3};

use super::state::World;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Planar move direction: x is strafe (+x right), y is depth (+z)
    pub move_dir: Vec2,
    /// Jump held
    pub jump: bool,
    /// Mouse motion to apply to the camera (only while look is held)
    pub look: Option<Vec2>,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    let settings = world.player_settings;
    let player = &mut world.player;

    world.time_ticks += 1;

    // Planar movement, speed independent of direction count
    let dir = Vec3::new(input.move_dir.x, 0.0, input.move_dir.y).normalize_or_zero();
    player.position += dir * settings.speed * dt;

    // Gravity
    player.y_velocity -= settings.gravity * dt;
    player.position.y += player.y_velocity * dt;

    // Flat ground
    if player.position.y <= settings.ground_height {
        player.position.y = settings.ground_height;
        player.y_velocity = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }

    if input.jump && player.grounded {
        player.y_velocity = settings.jump_power;
    }

    if let Some(delta) = input.look {
        world.camera.look(delta.x, delta.y, &world.camera_settings);
    }
}
