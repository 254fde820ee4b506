//! Mesh geometry buffers.

use glam::Vec3;
use voxanim_core::Aabb;

/// A mutable accumulator for mesh geometry: positions, normals, triangle
/// indices, and the bounds of all written vertices.
///
/// Indices are u32 throughout. A single 32^3 frame can already exceed the
/// 16-bit index range (tens of thousands of cubes times 24 vertices), so
/// there is no u16 path. All indices refer to this buffer's own vertex
/// arrays; buffers never cross-reference.
///
/// Once a build finishes, the buffer is treated as immutable and may be
/// shared read-only with a rendering consumer.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    /// Vertex positions in world space.
    pub positions: Vec<Vec3>,
    /// Unit vertex normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
    /// Triangle indices; every 3 consecutive entries form one triangle.
    pub indices: Vec<u32>,
    /// Bounds of all written vertices.
    pub bounds: Aabb,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zero-filled buffer of exactly the given size, ready for
    /// disjoint-slice writes. No reallocation happens during a fill.
    #[must_use]
    pub fn with_size(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; vertex_count],
            normals: vec![Vec3::ZERO; vertex_count],
            indices: vec![0; index_count],
            bounds: Aabb::EMPTY,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of indices.
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the buffer holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw bytes of the position array, for upload to a vertex buffer.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the normal array.
    #[must_use]
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Raw bytes of the index array.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
