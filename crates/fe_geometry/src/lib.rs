//! # Framework Engine Geometry
//!
//! Turns a [`fe_core::VoxelGrid`] into a flat triangle list.
//!
//! ## Pipeline
//!
//! ```text
//! VoxelGrid -> MeshBuilder::build -> VertexBuffer -> renderer
//!                 (36 vertices per enabled voxel)
//! ```
//!
//! Each enabled voxel is expanded in isolation: the unit-cube template is
//! copied, translated by the voxel's integer coordinate, then multiplied by the
//! grid scale. Faces shared between two solid voxels are emitted twice.
//!
//! ## Example
//!
//! ```rust
//! use fe_core::{Dimensions, VoxelGrid};
//! use fe_geometry::{MeshBuilder, VERTICES_PER_VOXEL};
//!
//! let mut grid = VoxelGrid::new(Dimensions::new(2, 1, 1))?;
//! grid.set_enabled(1, true)?;
//!
//! let mesh = MeshBuilder::new().build(&grid)?;
//! assert_eq!(mesh.vertex_count(), VERTICES_PER_VOXEL);
//! assert_eq!(mesh.as_floats().len(), VERTICES_PER_VOXEL * 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod builder;
pub mod error;
pub mod template;
pub mod vertex;

pub use buffer::VertexBuffer;
pub use builder::{MeshBuilder, MeshStats};
pub use error::{MeshError, MeshResult};
pub use template::{
    instance_cube, CubeFace, CUBE_TEMPLATE, FACES_PER_VOXEL, SCALARS_PER_VERTEX,
    TRIANGLES_PER_FACE, TRIANGLES_PER_VOXEL, VERTICES_PER_TRIANGLE, VERTICES_PER_VOXEL,
};
pub use vertex::Vertex;
