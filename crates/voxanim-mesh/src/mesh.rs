//! The final merged mesh and its submesh descriptors.

use voxanim_core::{Aabb, VoxelColor};

use crate::buffer::MeshBuffer;

/// One contiguous index range of a [`VoxelMesh`], rendered with one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submesh {
    /// First index of this submesh within the mesh's index array.
    pub index_offset: u32,
    /// Number of indices in this submesh.
    pub index_count: u32,
    /// Bounds of the vertices this submesh references.
    pub bounds: Aabb,
    /// Material color of this submesh.
    pub color: VoxelColor,
}

/// One frame's fully merged mesh: a single geometry buffer plus the submesh
/// descriptors a renderer needs to issue one draw call per material.
///
/// In per-material mode there is one submesh per distinct voxel color, laid
/// out group by group. In flattened mode there is a single submesh with the
/// uniform default color.
#[derive(Debug, Clone, Default)]
pub struct VoxelMesh {
    /// The combined geometry of all submeshes.
    pub buffer: MeshBuffer,
    /// Submesh descriptors in material discovery order.
    pub submeshes: Vec<Submesh>,
}

impl VoxelMesh {
    /// Returns the total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.buffer.vertex_count()
    }

    /// Returns the total number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.buffer.triangle_count()
    }

    /// Returns the bounds of the whole mesh.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.buffer.bounds
    }

    /// Returns true if the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
