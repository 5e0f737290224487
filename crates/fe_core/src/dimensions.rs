//! # Grid Dimensions and Coordinates
//!
//! Linear layout: `index = x + y * dim.x + z * dim.x * dim.y`.
//! X varies fastest, then Y, then Z.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extents of a voxel grid, in cells per axis.
///
/// A zero on any axis is a degenerate but valid grid with no cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Cells along X.
    pub x: u32,
    /// Cells along Y.
    pub y: u32,
    /// Cells along Z.
    pub z: u32,
}

impl Dimensions {
    /// Creates new dimensions.
    #[inline]
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Creates cubic dimensions with `size` cells per axis.
    #[inline]
    #[must_use]
    pub const fn cube(size: u32) -> Self {
        Self::new(size, size, size)
    }

    /// Total number of cells, or `None` if `x * y * z` overflows `usize`.
    #[inline]
    #[must_use]
    pub fn volume(self) -> Option<usize> {
        (self.x as usize)
            .checked_mul(self.y as usize)?
            .checked_mul(self.z as usize)
    }

    /// Returns true if any axis is zero.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Returns true if `coord` lies inside these dimensions.
    #[inline]
    #[must_use]
    pub const fn contains(self, coord: Coordinate) -> bool {
        coord.x < self.x && coord.y < self.y && coord.z < self.z
    }

    /// Linear index of `coord`.
    ///
    /// The caller guarantees `self.contains(coord)` and that the volume fits
    /// in `usize`; [`crate::VoxelGrid::coord_to_index`] is the checked form.
    #[inline]
    #[must_use]
    pub fn linearize(self, coord: Coordinate) -> usize {
        debug_assert!(self.contains(coord));
        let (dx, dy) = (self.x as usize, self.y as usize);
        coord.x as usize + coord.y as usize * dx + coord.z as usize * dx * dy
    }

    /// Coordinate of linear `index`.
    ///
    /// The caller guarantees `index < self.volume()`;
    /// [`crate::VoxelGrid::index_to_coord`] is the checked form.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn delinearize(self, index: usize) -> Coordinate {
        let dx = self.x as usize;
        let plane = dx * self.y as usize;
        debug_assert!(plane > 0 && index / plane < self.z as usize);
        let in_plane = index % plane;
        // Each component is below its u32 extent.
        Coordinate::new(
            (in_plane % dx) as u32,
            (in_plane / dx) as u32,
            (index / plane) as u32,
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Error returned when parsing `XxYxZ` dimension strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid dimensions '{input}': expected XxYxZ, e.g. 16x16x16")]
pub struct ParseDimensionsError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDimensionsError {
            input: s.to_string(),
        };
        let mut axes = s.trim().split(['x', 'X']).map(|part| part.trim().parse::<u32>());
        match (axes.next(), axes.next(), axes.next(), axes.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Self::new(x, y, z)),
            _ => Err(err()),
        }
    }
}

/// Position of a cell inside a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// X cell index.
    pub x: u32,
    /// Y cell index.
    pub y: u32,
    /// Z cell index.
    pub z: u32,
}

impl Coordinate {
    /// The grid origin.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Largest component that [`Coordinate::as_f32_array`] converts exactly
    /// (2^24). Above it neighbouring cells can round to the same float.
    pub const F32_EXACT_LIMIT: u32 = 1 << f32::MANTISSA_DIGITS;

    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Components as floats, for world-space transforms.
    ///
    /// Exact for components up to [`Coordinate::F32_EXACT_LIMIT`]; larger
    /// components are rounded to the nearest representable `f32`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f32_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
