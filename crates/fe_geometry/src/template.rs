//! # Unit Cube Template
//!
//! The 36-vertex triangle list instanced once per enabled voxel.
//!
//! Six faces, two triangles each, in the order -Z, +X, +Z, -X, +Y, -Y. Every
//! triangle `(a, b, c)` satisfies `(b - a) x (c - a) == face normal`, i.e. it is
//! wound clockwise when viewed from outside the cube with a left-handed
//! frame. The renderer's front-face state must match.

use fe_core::Coordinate;

use crate::vertex::Vertex;

/// Floats per vertex (x, y, z).
pub const SCALARS_PER_VERTEX: usize = 3;

/// Vertices per triangle.
pub const VERTICES_PER_TRIANGLE: usize = 3;

/// Triangles per cube face.
pub const TRIANGLES_PER_FACE: usize = 2;

/// Faces per voxel.
pub const FACES_PER_VOXEL: usize = 6;

/// Vertices emitted for one enabled voxel.
pub const VERTICES_PER_VOXEL: usize = VERTICES_PER_TRIANGLE * TRIANGLES_PER_FACE * FACES_PER_VOXEL;

/// Triangles emitted for one enabled voxel.
pub const TRIANGLES_PER_VOXEL: usize = TRIANGLES_PER_FACE * FACES_PER_VOXEL;

const VERTICES_PER_FACE: usize = VERTICES_PER_TRIANGLE * TRIANGLES_PER_FACE;

/// The unit cube, components in `{0, 1}`.
pub static CUBE_TEMPLATE: [Vertex; VERTICES_PER_VOXEL] = [
    // -Z
    Vertex::new(0.0, 1.0, 0.0),
    Vertex::new(1.0, 1.0, 0.0),
    Vertex::new(1.0, 0.0, 0.0),
    Vertex::new(1.0, 0.0, 0.0),
    Vertex::new(0.0, 0.0, 0.0),
    Vertex::new(0.0, 1.0, 0.0),
    // +X
    Vertex::new(1.0, 1.0, 0.0),
    Vertex::new(1.0, 1.0, 1.0),
    Vertex::new(1.0, 0.0, 1.0),
    Vertex::new(1.0, 0.0, 1.0),
    Vertex::new(1.0, 0.0, 0.0),
    Vertex::new(1.0, 1.0, 0.0),
    // +Z
    Vertex::new(1.0, 1.0, 1.0),
    Vertex::new(0.0, 1.0, 1.0),
    Vertex::new(0.0, 0.0, 1.0),
    Vertex::new(0.0, 0.0, 1.0),
    Vertex::new(1.0, 0.0, 1.0),
    Vertex::new(1.0, 1.0, 1.0),
    // -X
    Vertex::new(0.0, 1.0, 1.0),
    Vertex::new(0.0, 1.0, 0.0),
    Vertex::new(0.0, 0.0, 0.0),
    Vertex::new(0.0, 0.0, 0.0),
    Vertex::new(0.0, 0.0, 1.0),
    Vertex::new(0.0, 1.0, 1.0),
    // +Y
    Vertex::new(0.0, 1.0, 1.0),
    Vertex::new(1.0, 1.0, 1.0),
    Vertex::new(1.0, 1.0, 0.0),
    Vertex::new(1.0, 1.0, 0.0),
    Vertex::new(0.0, 1.0, 0.0),
    Vertex::new(0.0, 1.0, 1.0),
    // -Y
    Vertex::new(0.0, 0.0, 1.0),
    Vertex::new(0.0, 0.0, 0.0),
    Vertex::new(1.0, 0.0, 0.0),
    Vertex::new(1.0, 0.0, 0.0),
    Vertex::new(1.0, 0.0, 1.0),
    Vertex::new(0.0, 0.0, 1.0),
];

/// One face of the cube template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// Facing -Z.
    NegZ,
    /// Facing +X.
    PosX,
    /// Facing +Z.
    PosZ,
    /// Facing -X.
    NegX,
    /// Facing +Y.
    PosY,
    /// Facing -Y.
    NegY,
}

impl CubeFace {
    /// All faces, in template order.
    pub const ALL: [Self; FACES_PER_VOXEL] = [
        Self::NegZ,
        Self::PosX,
        Self::PosZ,
        Self::NegX,
        Self::PosY,
        Self::NegY,
    ];

    /// Outward unit normal.
    #[must_use]
    pub const fn normal(self) -> [f32; 3] {
        match self {
            Self::NegZ => [0.0, 0.0, -1.0],
            Self::PosX => [1.0, 0.0, 0.0],
            Self::PosZ => [0.0, 0.0, 1.0],
            Self::NegX => [-1.0, 0.0, 0.0],
            Self::PosY => [0.0, 1.0, 0.0],
            Self::NegY => [0.0, -1.0, 0.0],
        }
    }

    /// The six template vertices (two triangles) of this face.
    #[must_use]
    pub fn vertices(self) -> &'static [Vertex] {
        let start = self as usize * VERTICES_PER_FACE;
        &CUBE_TEMPLATE[start..start + VERTICES_PER_FACE]
    }
}

/// Instances the template for the voxel at `coord`.
///
/// Every vertex is translated by the integer coordinate first and then
/// multiplied by `scale`, so each component equals `(template + coord) * scale`.
/// Positions are `f32`, so cubes stay gap-free only while every coordinate
/// component is at most [`Coordinate::F32_EXACT_LIMIT`].
#[inline]
#[must_use]
pub fn instance_cube(coord: Coordinate, scale: f32) -> [Vertex; VERTICES_PER_VOXEL] {
    let offset = coord.as_f32_array();
    let mut scratch = CUBE_TEMPLATE;
    for vertex in &mut scratch {
        *vertex = vertex.translated(offset).scaled(scale);
    }
    scratch
}
