//! Seeded grid classification
//!
//! Every cell of a square grid is classified as empty, platform or obstacle.
//! Traversal order is fixed (x outer, z inner) and a single generator is
//! shared by the whole pass, so a given cell always consumes the same draw.
//! The origin is the spawn point: it is always a platform and consumes no draw.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::seed::LevelSeed;
use crate::consts::MAX_GRID_SIZE;
use crate::error::ParameterError;

/// Slack allowed when checking `p_empty + p_platform <= 1`: two ULPs at 1.0,
/// enough for rounding in sums like 0.7 + 0.3 and nothing more
const PROBABILITY_SLACK: f64 = 2.0 * f64::EPSILON;

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Platform,
    Obstacle,
}

impl CellKind {
    /// Classify a uniform sample `r` in [0, 1)
    #[inline]
    pub fn classify(r: f64, p_empty: f64, p_platform: f64) -> Self {
        if r < p_empty {
            CellKind::Empty
        } else if r < p_empty + p_platform {
            CellKind::Platform
        } else {
            CellKind::Obstacle
        }
    }
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: u32,
    pub z: u32,
}

impl GridCell {
    pub const ORIGIN: GridCell = GridCell { x: 0, z: 0 };

    pub fn new(x: u32, z: u32) -> Self {
        Self { x, z }
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// World position on the platform plane
    pub fn world_position(&self, cell_size: f32) -> Vec3 {
        Vec3::new(self.x as f32 * cell_size, 0.0, self.z as f32 * cell_size)
    }
}

/// A classified cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCell {
    pub cell: GridCell,
    pub kind: CellKind,
}

/// Grid generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelParams {
    /// Cells per side (signed so bad input can be reported rather than wrapped)
    pub grid_size: i64,
    /// World units per cell
    pub cell_size: f32,
    pub p_empty: f64,
    pub p_platform: f64,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            grid_size: 20,
            cell_size: 2.0,
            p_empty: 0.7,
            p_platform: 0.2,
        }
    }
}

impl LevelParams {
    pub fn new(grid_size: i64, cell_size: f32, p_empty: f64, p_platform: f64) -> Self {
        Self {
            grid_size,
            cell_size,
            p_empty,
            p_platform,
        }
    }

    /// Check preconditions, returning the grid size as an unsigned count
    pub fn validate(&self) -> Result<u32, ParameterError> {
        if self.grid_size <= 0 {
            return Err(ParameterError::GridSize(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE as i64 {
            return Err(ParameterError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE as i64,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ParameterError::CellSize(self.cell_size));
        }
        for (name, value) in [("p_empty", self.p_empty), ("p_platform", self.p_platform)] {
            // Written to reject NaN as well
            if !(0.0..=1.0).contains(&value) {
                return Err(ParameterError::Probability { name, value });
            }
        }
        if self.p_empty + self.p_platform > 1.0 + PROBABILITY_SLACK {
            return Err(ParameterError::ProbabilitySum {
                p_empty: self.p_empty,
                p_platform: self.p_platform,
            });
        }
        Ok(self.grid_size as u32)
    }
}

/// Lazy cell sequence for one level
///
/// Yields exactly `grid_size²` cells. Callers that need to spread work
/// across frames can pull cells in batches with `by_ref().take(n)`.
#[derive(Debug, Clone)]
pub struct CellIter {
    rng: Pcg32,
    grid_size: u32,
    p_empty: f64,
    p_platform: f64,
    x: u32,
    z: u32,
}

impl CellIter {
    fn remaining(&self) -> usize {
        if self.x >= self.grid_size {
            return 0;
        }
        let n = self.grid_size as usize;
        (n - self.x as usize) * n - self.z as usize
    }
}

impl Iterator for CellIter {
    type Item = PlacedCell;

    fn next(&mut self) -> Option<PlacedCell> {
        if self.x >= self.grid_size {
            return None;
        }
        let cell = GridCell::new(self.x, self.z);

        self.z += 1;
        if self.z == self.grid_size {
            self.z = 0;
            self.x += 1;
        }

        let kind = if cell.is_origin() {
            CellKind::Platform
        } else {
            let r: f64 = self.rng.random();
            CellKind::classify(r, self.p_empty, self.p_platform)
        };
        Some(PlacedCell { cell, kind })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellIter {}

/// Start a lazy generation pass
pub fn cells(level_name: &str, params: &LevelParams) -> Result<CellIter, ParameterError> {
    let grid_size = params.validate()?;
    Ok(CellIter {
        rng: LevelSeed::from_name(level_name).to_rng(),
        grid_size,
        p_empty: params.p_empty,
        p_platform: params.p_platform,
        x: 0,
        z: 0,
    })
}

/// A fully generated level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub seed: LevelSeed,
    pub params: LevelParams,
    /// Cells in traversal order (x outer, z inner)
    pub cells: Vec<PlacedCell>,
}

impl LevelLayout {
    pub fn grid_size(&self) -> u32 {
        self.params.grid_size as u32
    }

    /// Kind of the cell at (x, z), if inside the grid
    pub fn kind_at(&self, x: u32, z: u32) -> Option<CellKind> {
        let n = self.grid_size();
        if x >= n || z >= n {
            return None;
        }
        self.cells
            .get(x as usize * n as usize + z as usize)
            .map(|c| c.kind)
    }

    /// Number of cells of the given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}

/// Generate the full layout for a level
pub fn generate(level_name: &str, params: &LevelParams) -> Result<LevelLayout, ParameterError> {
    let cells: Vec<PlacedCell> = cells(level_name, params)?.collect();
    let layout = LevelLayout {
        name: level_name.to_string(),
        seed: LevelSeed::from_name(level_name),
        params: *params,
        cells,
    };

    log::debug!(
        "Generated '{}' ({}x{}): {} platforms, {} obstacles",
        level_name,
        layout.grid_size(),
        layout.grid_size(),
        layout.count(CellKind::Platform),
        layout.count(CellKind::Obstacle),
    );

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::fnv1a_64;

    #[test]
    fn test_bob_omb_islands_is_reproducible() {
        let params = LevelParams::new(20, 2.0, 0.7, 0.2);
        let a = generate("Bob-omb Islands", &params).unwrap();
        let b = generate("Bob-omb Islands", &params).unwrap();

        assert_eq!(a.cells.len(), 400);
        assert_eq!(a.cells, b.cells);
        assert_eq!(a.cells[0].cell, GridCell::ORIGIN);
        assert_eq!(a.cells[0].kind, CellKind::Platform);
        assert_eq!(b.kind_at(0, 0), Some(CellKind::Platform));
    }

    #[test]
    fn test_origin_consumes_no_draw() {
        let params = LevelParams::new(20, 2.0, 0.7, 0.2);
        let layout = generate("Bob-omb Islands", &params).unwrap();

        // Replay the generator by hand: the first draw must belong to (0, 1)
        let mut rng = LevelSeed::from_name("Bob-omb Islands").to_rng();
        for placed in layout.cells.iter().skip(1) {
            let r: f64 = rng.random();
            assert_eq!(placed.kind, CellKind::classify(r, 0.7, 0.2), "{:?}", placed.cell);
        }
        assert_eq!(layout.cells[1].cell, GridCell::new(0, 1));
    }

    #[test]
    fn test_traversal_order() {
        let params = LevelParams::new(3, 1.0, 0.5, 0.5);
        let order: Vec<(u32, u32)> = cells("order", &params)
            .unwrap()
            .map(|c| (c.cell.x, c.cell.z))
            .collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_names_give_different_layouts() {
        let params = LevelParams::new(20, 2.0, 0.7, 0.2);
        let a = generate("Bob-omb Islands", &params).unwrap();
        let b = generate("Sky Land Resort", &params).unwrap();
        let differing = a
            .cells
            .iter()
            .zip(&b.cells)
            .skip(1)
            .filter(|(x, y)| x.kind != y.kind)
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn test_frequencies_converge() {
        let params = LevelParams::new(100, 1.0, 0.7, 0.2);
        for name in ["Bob-omb Islands", "Koopa Canyon", "Star Road", "Gloomy Garden"] {
            let layout = generate(name, &params).unwrap();
            let samples = (layout.cells.len() - 1) as f64;
            let freq = |kind| {
                layout.cells.iter().skip(1).filter(|c| c.kind == kind).count() as f64 / samples
            };
            assert!((freq(CellKind::Empty) - 0.7).abs() < 0.05, "{name}");
            assert!((freq(CellKind::Platform) - 0.2).abs() < 0.05, "{name}");
            assert!((freq(CellKind::Obstacle) - 0.1).abs() < 0.05, "{name}");
        }
    }

    #[test]
    fn test_degenerate_probabilities() {
        let all_empty = generate("x", &LevelParams::new(5, 1.0, 1.0, 0.0)).unwrap();
        assert_eq!(all_empty.count(CellKind::Platform), 1);
        assert_eq!(all_empty.count(CellKind::Empty), 24);

        let all_obstacle = generate("x", &LevelParams::new(5, 1.0, 0.0, 0.0)).unwrap();
        assert_eq!(all_obstacle.count(CellKind::Obstacle), 24);

        let single = generate("x", &LevelParams::new(1, 1.0, 0.7, 0.2)).unwrap();
        assert_eq!(single.cells.len(), 1);
        assert_eq!(single.cells[0].kind, CellKind::Platform);
    }

    #[test]
    fn test_golden_layout() {
        assert_eq!(fnv1a_64("Bob-omb Islands"), 0x104b_f4f4_88ba_58c1);

        let layout = generate("Bob-omb Islands", &LevelParams::default()).unwrap();
        let kinds: String = layout
            .cells
            .iter()
            .take(40)
            .map(|c| match c.kind {
                CellKind::Empty => 'E',
                CellKind::Platform => 'P',
                CellKind::Obstacle => 'O',
            })
            .collect();
        assert_eq!(kinds, "POEEEPPOPPEEEEEEEEEEEEPPEEEEEEEPPEPEEEEO");
    }

    #[test]
    fn test_probability_sum_slack() {
        let over = LevelParams::new(20, 2.0, 1.0, 1e-10);
        assert!(matches!(
            generate("a", &over),
            Err(ParameterError::ProbabilitySum { .. })
        ));
        // Rounding in an exact-one sum is tolerated
        assert!(LevelParams::new(20, 2.0, 0.7, 0.3).validate().is_ok());
        assert!(LevelParams::new(20, 2.0, 0.1 + 0.2, 0.7).validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let bad_size = LevelParams::new(-1, 2.0, 0.7, 0.2);
        assert_eq!(generate("a", &bad_size).unwrap_err(), ParameterError::GridSize(-1));

        let zero = LevelParams::new(0, 2.0, 0.7, 0.2);
        assert!(matches!(zero.validate(), Err(ParameterError::GridSize(0))));

        let sum = LevelParams::new(20, 2.0, 0.8, 0.5);
        assert!(matches!(
            generate("a", &sum),
            Err(ParameterError::ProbabilitySum { .. })
        ));

        let neg = LevelParams::new(20, 2.0, -0.1, 0.2);
        assert!(matches!(
            neg.validate(),
            Err(ParameterError::Probability { name: "p_empty", .. })
        ));

        let nan = LevelParams::new(20, 2.0, 0.1, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(ParameterError::Probability { name: "p_platform", .. })
        ));

        let huge = LevelParams::new(MAX_GRID_SIZE as i64 + 1, 2.0, 0.7, 0.2);
        assert!(matches!(huge.validate(), Err(ParameterError::GridTooLarge { .. })));

        let cell = LevelParams::new(20, 0.0, 0.7, 0.2);
        assert!(matches!(cell.validate(), Err(ParameterError::CellSize(_))));
    }

    #[test]
    fn test_iterator_is_exact_and_batchable() {
        let params = LevelParams::new(20, 2.0, 0.7, 0.2);
        let mut iter = cells("Chuckya Harbor", &params).unwrap();
        assert_eq!(iter.len(), 400);

        let mut batched = Vec::new();
        while iter.len() > 0 {
            batched.extend(iter.by_ref().take(64));
        }
        let full = generate("Chuckya Harbor", &params).unwrap();
        assert_eq!(batched, full.cells);
    }

    #[test]
    fn test_world_position() {
        let cell = GridCell::new(3, 5);
        assert_eq!(cell.world_position(2.0), Vec3::new(6.0, 0.0, 10.0));
    }
}
