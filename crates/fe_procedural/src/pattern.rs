//! # Occupancy Patterns
//!
//! Deterministic ways to populate a [`VoxelGrid`].
//!
//! Applying a pattern overwrites every cell: cells the pattern rejects are
//! disabled, whatever they held before.

use fe_core::{Coordinate, GridResult, VoxelGrid};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::noise::{NoiseSeed, SimplexNoise3};

/// Sub-seed stream used for occupancy noise.
const OCCUPANCY_STREAM: u64 = 0x6f63_6375_7079;

/// How a chunk's occupancy is generated.
///
/// Deserializes from a table tagged by `kind`:
///
/// ```toml
/// kind = "noise"
/// seed = 7
/// threshold = 0.2
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    /// Every cell disabled.
    Empty,
    /// Every cell enabled.
    Solid,
    /// Cells with an even `x + y + z` enabled.
    Checkerboard,
    /// Cells whose noise sample reaches a threshold enabled.
    Noise(NoiseFill),
}

impl Default for Pattern {
    fn default() -> Self {
        Self::Noise(NoiseFill::default())
    }
}

impl Pattern {
    /// Short name, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Solid => "solid",
            Self::Checkerboard => "checkerboard",
            Self::Noise(_) => "noise",
        }
    }

    /// Populates `grid`, walking every index in ascending order.
    ///
    /// Returns the number of enabled cells.
    ///
    /// # Errors
    ///
    /// Propagates grid addressing errors; none occur for a well-formed grid.
    pub fn apply(&self, grid: &mut VoxelGrid) -> GridResult<usize> {
        let enabled = match self {
            Self::Empty => {
                grid.clear();
                0
            }
            Self::Solid => {
                grid.fill(true);
                grid.len()
            }
            Self::Checkerboard => fill_with(grid, |c| {
                (u64::from(c.x) + u64::from(c.y) + u64::from(c.z)) % 2 == 0
            })?,
            Self::Noise(fill) => {
                let noise = fill.generator();
                fill_with(grid, |c| fill.accepts(&noise, c))?
            }
        };

        debug!(
            pattern = self.name(),
            dimensions = %grid.dimensions(),
            enabled,
            "populated voxel grid"
        );
        Ok(enabled)
    }
}

/// Threshold noise fill.
///
/// A cell at `(x, y, z)` is enabled when
/// `sample(x / divisor, y / divisor, z / divisor) >= threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseFill {
    /// Noise seed.
    pub seed: u64,
    /// Divides cell coordinates before sampling; larger is smoother.
    pub frequency_divisor: f64,
    /// Minimum sample for a cell to be enabled.
    pub threshold: f64,
}

impl NoiseFill {
    /// Default coordinate divisor.
    pub const DEFAULT_FREQUENCY_DIVISOR: f64 = 10.0;
    /// Default enable threshold.
    pub const DEFAULT_THRESHOLD: f64 = 0.16;

    /// Fill with the given seed and default shape.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Noise generator for this fill's seed.
    #[must_use]
    pub fn generator(&self) -> SimplexNoise3 {
        SimplexNoise3::new(NoiseSeed::new(self.seed).derive(OCCUPANCY_STREAM))
    }

    /// Returns true if the cell at `coord` is enabled under this fill.
    #[must_use]
    pub fn accepts(&self, noise: &SimplexNoise3, coord: Coordinate) -> bool {
        let d = self.frequency_divisor;
        let sample = noise.sample(
            f64::from(coord.x) / d,
            f64::from(coord.y) / d,
            f64::from(coord.z) / d,
        );
        sample >= self.threshold
    }
}

impl Default for NoiseFill {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency_divisor: Self::DEFAULT_FREQUENCY_DIVISOR,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

fn fill_with(
    grid: &mut VoxelGrid,
    mut predicate: impl FnMut(Coordinate) -> bool,
) -> GridResult<usize> {
    let mut enabled = 0;
    for index in 0..grid.len() {
        let on = predicate(grid.index_to_coord(index)?);
        grid.set_enabled(index, on)?;
        enabled += usize::from(on);
    }
    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fe_core::Dimensions;

    #[test]
    fn test_solid_and_empty() {
        let mut grid = VoxelGrid::new(Dimensions::cube(4)).unwrap();
        assert_eq!(Pattern::Solid.apply(&mut grid).unwrap(), 64);
        assert_eq!(grid.enabled_count(), 64);
        assert_eq!(Pattern::Empty.apply(&mut grid).unwrap(), 0);
        assert_eq!(grid.enabled_count(), 0);
    }

    #[test]
    fn test_checkerboard_parity() {
        let mut grid = VoxelGrid::new(Dimensions::new(2, 2, 2)).unwrap();
        assert_eq!(Pattern::Checkerboard.apply(&mut grid).unwrap(), 4);
        assert!(grid.is_enabled_at(Coordinate::ORIGIN).unwrap());
        assert!(!grid.is_enabled_at(Coordinate::new(1, 0, 0)).unwrap());
        assert!(grid.is_enabled_at(Coordinate::new(1, 1, 0)).unwrap());
        assert!(!grid.is_enabled_at(Coordinate::new(1, 1, 1)).unwrap());
    }

    #[test]
    fn test_apply_overwrites_previous_state() {
        let mut grid = VoxelGrid::new(Dimensions::new(2, 1, 1)).unwrap();
        grid.set_enabled(1, true).unwrap();
        Pattern::Checkerboard.apply(&mut grid).unwrap();
        assert!(!grid.is_enabled(1).unwrap());
    }

    #[test]
    fn test_noise_fill_count_matches_grid() {
        let mut grid = VoxelGrid::new(Dimensions::cube(16)).unwrap();
        let enabled = Pattern::default().apply(&mut grid).unwrap();
        assert_eq!(enabled, grid.enabled_count());
        // The origin is a simplex vertex and samples zero.
        assert!(!grid.is_enabled(0).unwrap());
    }

    #[test]
    fn test_noise_fill_is_deterministic() {
        let pattern = Pattern::Noise(NoiseFill::with_seed(99));
        let mut a = VoxelGrid::new(Dimensions::cube(12)).unwrap();
        let mut b = VoxelGrid::new(Dimensions::cube(12)).unwrap();
        pattern.apply(&mut a).unwrap();
        pattern.apply(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_extremes() {
        let mut grid = VoxelGrid::new(Dimensions::cube(8)).unwrap();

        let all = NoiseFill {
            threshold: -1.0,
            ..NoiseFill::default()
        };
        assert_eq!(Pattern::Noise(all).apply(&mut grid).unwrap(), 512);

        let none = NoiseFill {
            threshold: 1.5,
            ..NoiseFill::default()
        };
        assert_eq!(Pattern::Noise(none).apply(&mut grid).unwrap(), 0);
    }

    #[test]
    fn test_deserialize_tagged() {
        let pattern: Pattern = toml::from_str("kind = \"checkerboard\"").unwrap();
        assert_eq!(pattern, Pattern::Checkerboard);

        let pattern: Pattern = toml::from_str("kind = \"noise\"\nseed = 7").unwrap();
        assert_eq!(pattern, Pattern::Noise(NoiseFill::with_seed(7)));
    }
}
