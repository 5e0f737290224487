//! # Vertex Buffer
//!
//! Owned, flat output of the mesher. The renderer uploads [`VertexBuffer::as_bytes`]
//! verbatim and draws [`VertexBuffer::vertex_count`] vertices as a triangle list.

use crate::error::{MeshError, MeshResult};
use crate::template::{VERTICES_PER_TRIANGLE, VERTICES_PER_VOXEL};
use crate::vertex::Vertex;

/// Position-only triangle list.
///
/// Capacity is reserved up front for the worst case (every voxel enabled);
/// the length is the number of vertices actually emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
}

impl VertexBuffer {
    /// Empty buffer with no reservation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Empty buffer with room for `voxels * 36` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Allocation`] if the vertex count overflows or the
    /// storage cannot be reserved.
    pub fn with_voxel_capacity(voxels: usize) -> MeshResult<Self> {
        let capacity = voxels
            .checked_mul(VERTICES_PER_VOXEL)
            .ok_or(MeshError::Allocation { voxels })?;

        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(capacity)
            .map_err(|_| MeshError::Allocation { voxels })?;

        Ok(Self { vertices })
    }

    /// Appends one instanced cube.
    #[inline]
    pub(crate) fn push_cube(&mut self, cube: &[Vertex; VERTICES_PER_VOXEL]) {
        self.vertices.extend_from_slice(cube);
    }

    /// Number of emitted vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Number of emitted vertices, as passed to the draw call.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of emitted triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_TRIANGLE
    }

    /// Returns true if no vertices were emitted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Reserved capacity, in vertices.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Emitted vertices.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Emitted vertices as a flat float stream, three floats per vertex.
    #[inline]
    #[must_use]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Emitted vertices as raw bytes for GPU upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Consumes the buffer, returning the vertex storage.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}
