//! # Chunk Pipeline
//!
//! Configuration in, mesh out:
//!
//! ```text
//! ChunkConfig -> VoxelGrid::new -> Pattern::apply -> MeshBuilder::build -> ChunkMesh
//! ```

use fe_core::{destroy, VoxelGrid};
use fe_geometry::{MeshBuilder, MeshStats, VertexBuffer};
use tracing::{debug, info};

use crate::config::ChunkConfig;
use crate::error::FeResult;
use crate::sink::MeshSink;

/// Builds chunk meshes from configuration.
#[derive(Clone, Debug)]
pub struct ChunkPipeline {
    config: ChunkConfig,
    builder: MeshBuilder,
}

impl ChunkPipeline {
    /// Creates a pipeline for `config`.
    #[must_use]
    pub fn from_config(config: &ChunkConfig) -> Self {
        Self {
            config: config.clone(),
            builder: MeshBuilder::new(),
        }
    }

    /// The configuration this pipeline builds.
    #[must_use]
    pub const fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Creates the grid, applies the pattern and builds the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FeError::Grid`] if the grid cannot be created or the
    /// scale is invalid, and [`crate::FeError::Mesh`] if the vertex buffer
    /// cannot be reserved.
    pub fn build(&self) -> FeResult<ChunkMesh> {
        let mut grid = VoxelGrid::new(self.config.dimensions)?.with_scale(self.config.scale)?;
        let enabled = self.config.pattern.apply(&mut grid)?;
        debug!(
            pattern = self.config.pattern.name(),
            enabled, "chunk occupancy generated"
        );

        let vertices = self.builder.build(&grid)?;
        let stats = self.builder.stats(&vertices);
        info!(
            dimensions = %grid.dimensions(),
            scale = grid.scale(),
            %stats,
            "chunk mesh built"
        );

        Ok(ChunkMesh {
            grid,
            vertices,
            stats,
        })
    }

    /// Regenerates the whole mesh of `mesh` from its current occupancy.
    ///
    /// Call after mutating [`ChunkMesh::grid_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::FeError::Mesh`] if the vertex buffer cannot be reserved.
    /// The previous mesh is kept on failure.
    pub fn rebuild(&self, mesh: &mut ChunkMesh) -> FeResult<()> {
        let vertices = self.builder.build(&mesh.grid)?;
        mesh.stats = self.builder.stats(&vertices);
        mesh.vertices = vertices;
        debug!(stats = %mesh.stats, "chunk mesh rebuilt");
        Ok(())
    }
}

/// A populated chunk together with its mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
    grid: VoxelGrid,
    vertices: VertexBuffer,
    stats: MeshStats,
}

impl ChunkMesh {
    /// The chunk's occupancy.
    #[must_use]
    pub const fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Mutable occupancy. The mesh is stale until [`ChunkPipeline::rebuild`].
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    /// The built vertices.
    #[must_use]
    pub const fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    /// Summary of the built vertices.
    #[must_use]
    pub const fn stats(&self) -> MeshStats {
        self.stats
    }

    /// Hands the mesh to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error.
    pub fn submit(&self, sink: &mut dyn MeshSink) -> FeResult<()> {
        sink.submit(self.vertices.as_floats(), self.vertices.vertex_count())
    }

    /// Releases the grid and returns the vertices.
    #[must_use]
    pub fn into_vertices(self) -> VertexBuffer {
        let mut slot = Some(self.grid);
        destroy(&mut slot);
        self.vertices
    }
}
