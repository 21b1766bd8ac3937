//! Error types

use thiserror::Error;

/// Invalid level-generation parameters.
///
/// Raised before any cell is produced; the generator never clamps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("grid size must be positive, got {0}")]
    GridSize(i64),
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: i64, max: i64 },
    #[error("cell size must be positive and finite, got {0}")]
    CellSize(f32),
    #[error("probability {name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
    /// Sum exceeds 1 by more than two ULPs (float rounding only)
    #[error("p_empty + p_platform must not exceed 1, got {p_empty} + {p_platform}")]
    ProbabilitySum { p_empty: f64, p_platform: f64 },
}

/// Failure to load a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid level settings: {0}")]
    Level(#[from] ParameterError),
}

/// Level id not found in the course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no course named '{0}' in the catalog")]
    UnknownCourse(String),
}
