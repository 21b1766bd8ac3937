//! Deterministic level generation
//!
//! Pure and seeded: the same course name and parameters always produce the
//! same layout. No rendering or engine dependencies.

pub mod grid;
pub mod scene;
pub mod seed;

pub use grid::{CellIter, CellKind, GridCell, LevelLayout, LevelParams, PlacedCell, cells, generate};
pub use scene::{SceneObject, Shape};
pub use seed::{LevelSeed, fnv1a_64};
