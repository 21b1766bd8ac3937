//! Static collidable geometry for a generated layout
//!
//! Platforms are boxes flush with the ground plane; obstacles are spheres
//! raised one unit above it. Empty cells produce nothing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::grid::{CellKind, LevelLayout, PlacedCell};

/// Height of an obstacle's centre above the platform plane
pub const OBSTACLE_ELEVATION: f32 = 1.0;
/// Platform box height
pub const PLATFORM_HEIGHT: f32 = 1.0;
/// Obstacle sphere radius (unit diameter)
pub const OBSTACLE_RADIUS: f32 = 0.5;

/// Collider/visual shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box { size: Vec3 },
    Sphere { radius: f32 },
}

/// One object for the host engine to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub position: Vec3,
    pub shape: Shape,
}

impl SceneObject {
    /// Geometry for a single cell (None for empty cells)
    pub fn for_cell(placed: &PlacedCell, cell_size: f32) -> Option<Self> {
        let base = placed.cell.world_position(cell_size);
        match placed.kind {
            CellKind::Empty => None,
            CellKind::Platform => Some(Self {
                position: base,
                shape: Shape::Box {
                    size: Vec3::new(cell_size, PLATFORM_HEIGHT, cell_size),
                },
            }),
            CellKind::Obstacle => Some(Self {
                position: base + Vec3::Y * OBSTACLE_ELEVATION,
                shape: Shape::Sphere {
                    radius: OBSTACLE_RADIUS,
                },
            }),
        }
    }

    pub fn is_platform(&self) -> bool {
        matches!(self.shape, Shape::Box { .. })
    }
}

impl LevelLayout {
    /// Scene objects in traversal order
    pub fn scene_objects(&self) -> Vec<SceneObject> {
        self.cells
            .iter()
            .filter_map(|c| SceneObject::for_cell(c, self.params.cell_size))
            .collect()
    }
}
