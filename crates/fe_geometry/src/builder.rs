//! # Mesh Builder
//!
//! Naive template instancing: one full cube per enabled voxel.
//!
//! No face between two solid voxels is removed, so the output contains
//! internal, mutually-hidden faces. Every rebuild regenerates the whole mesh.

use std::fmt;

use fe_core::VoxelGrid;
use tracing::debug;

use crate::buffer::VertexBuffer;
use crate::error::MeshResult;
use crate::template::{instance_cube, VERTICES_PER_VOXEL};
use crate::vertex::Vertex;

/// Builds vertex buffers from voxel grids.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshBuilder;

impl MeshBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Meshes `grid`.
    ///
    /// Walks every linear index in ascending order. For each enabled voxel
    /// the cube template is translated by the voxel's coordinate, scaled by
    /// `grid.scale()` and appended. The output is reserved for every voxel in
    /// the grid, so its capacity is `len * 36` even when few are enabled.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::Allocation`] if the output cannot be reserved.
    pub fn build(&self, grid: &VoxelGrid) -> MeshResult<VertexBuffer> {
        let mut buffer = VertexBuffer::with_voxel_capacity(grid.len())?;
        debug!(
            dimensions = %grid.dimensions(),
            bytes = buffer.capacity() * Vertex::STRIDE,
            "allocated chunk vertex buffer"
        );

        #[allow(clippy::cast_possible_truncation)]
        let scale = grid.scale() as f32;

        for index in 0..grid.len() {
            if !grid.is_enabled(index)? {
                continue;
            }
            let coord = grid.index_to_coord(index)?;
            buffer.push_cube(&instance_cube(coord, scale));
        }

        let stats = MeshStats::from_buffer(&buffer);
        debug!(%stats, "built chunk mesh");

        Ok(buffer)
    }

    /// Summarizes a buffer produced by [`MeshBuilder::build`].
    #[must_use]
    pub fn stats(&self, buffer: &VertexBuffer) -> MeshStats {
        MeshStats::from_buffer(buffer)
    }
}

/// Size summary of a built mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Voxels that emitted a cube.
    pub enabled_voxels: usize,
    /// Vertices emitted.
    pub vertex_count: usize,
    /// Triangles emitted.
    pub triangle_count: usize,
    /// Size of the emitted vertices in bytes.
    pub byte_len: usize,
}

impl MeshStats {
    /// Computes the summary of `buffer`.
    #[must_use]
    pub fn from_buffer(buffer: &VertexBuffer) -> Self {
        Self {
            enabled_voxels: buffer.vertex_count() / VERTICES_PER_VOXEL,
            vertex_count: buffer.vertex_count(),
            triangle_count: buffer.triangle_count(),
            byte_len: buffer.as_bytes().len(),
        }
    }
}

impl fmt::Display for MeshStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} voxels, {} vertices, {} triangles, {} bytes",
            self.enabled_voxels, self.vertex_count, self.triangle_count, self.byte_len
        )
    }
}

impl From<&VertexBuffer> for MeshStats {
    fn from(buffer: &VertexBuffer) -> Self {
        Self::from_buffer(buffer)
    }
}
