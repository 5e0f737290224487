//! # Mesh Error Types

use fe_core::GridError;
use thiserror::Error;

/// Errors that can occur while meshing a chunk.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The output vertex buffer could not be reserved.
    #[error("could not allocate vertex storage for {voxels} voxels")]
    Allocation {
        /// Number of voxels the buffer was sized for.
        voxels: usize,
    },

    /// Grid access failed while walking occupancy.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
