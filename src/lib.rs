//! Star Road - fan-game prototypes for Super Mario Star Road
//!
//! Core modules:
//! - `level`: Deterministic, name-seeded level generation
//! - `sim`: Movement sandbox (toy gravity/jump integrator)
//! - `story`: Narrative slideshow with star counters
//! - `catalog` / `browser`: Static course data and the scrollable list
//! - `app`: Session controller and mode-specific input dispatch
//! - `settings`: Data-driven tuning

pub mod app;
pub mod browser;
pub mod catalog;
pub mod error;
pub mod input;
pub mod level;
pub mod settings;
pub mod sim;
pub mod story;

pub use app::{App, Mode, Session};
pub use error::{CatalogError, ParameterError, SettingsError};
pub use level::{CellKind, GridCell, LevelLayout, LevelParams, generate};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz, matching the vsync'd original)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the accumulator will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Largest accepted grid side; bigger grids are rejected before allocating
    pub const MAX_GRID_SIZE: u32 = 4096;

    /// Player spawn, standing on the origin platform
    pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
}
