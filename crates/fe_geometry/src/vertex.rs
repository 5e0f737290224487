//! Vertex format.

use bytemuck::{Pod, Zeroable};

/// Position-only vertex, packed for direct GPU upload.
///
/// Layout is three tightly packed `f32`s (12 bytes, no padding), so a slice of
/// vertices can be reinterpreted as `&[f32]` or `&[u8]` without copying.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in world space [x, y, z]
    pub position: [f32; 3],
}

impl Vertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Creates a vertex from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    /// Adds `offset` to every component.
    #[inline]
    #[must_use]
    pub fn translated(self, offset: [f32; 3]) -> Self {
        let [x, y, z] = self.position;
        Self::new(x + offset[0], y + offset[1], z + offset[2])
    }

    /// Multiplies every component by `factor`.
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        let [x, y, z] = self.position;
        Self::new(x * factor, y * factor, z * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 12);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn test_translate_then_scale() {
        let v = Vertex::new(1.0, 0.0, 1.0).translated([1.0, 2.0, 3.0]).scaled(0.5);
        assert_eq!(v, Vertex::new(1.0, 1.0, 2.0));
    }
}
