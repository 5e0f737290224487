//! # Grid Error Types
//!
//! All errors that can occur while creating or addressing a voxel grid.

use thiserror::Error;

use crate::dimensions::{Coordinate, Dimensions};

/// Errors that can occur in the voxel grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Occupancy storage could not be obtained.
    #[error("could not allocate occupancy storage for a {dimensions} grid")]
    Allocation {
        /// The requested grid extents.
        dimensions: Dimensions,
    },

    /// Linear index outside `[0, len)`.
    #[error("index {index} out of range for grid of {len} voxels")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of voxels in the grid.
        len: usize,
    },

    /// Coordinate outside the grid extents.
    #[error("coordinate {coord} out of range for grid {dimensions}")]
    CoordinateOutOfRange {
        /// The rejected coordinate.
        coord: Coordinate,
        /// The grid extents.
        dimensions: Dimensions,
    },

    /// Scale must be finite and strictly positive.
    #[error("invalid scale {0}: must be finite and greater than zero")]
    InvalidScale(f64),
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
