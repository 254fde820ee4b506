//! The unit cube prototype shared by every voxel instance.
//!
//! The cube spans [-0.5, 0.5] on each axis and carries four vertices per
//! face so faces shade flat (vertex normals are the face normal, not an
//! average). Winding is counter-clockwise seen from outside.

use glam::Vec3;

/// Vertices per cube prototype (4 per face, 6 faces).
pub const VERTS_PER_CUBE: usize = 24;

/// Indices per cube prototype (2 triangles per face, 6 faces).
pub const INDICES_PER_CUBE: usize = 36;

/// Prototype vertex positions, grouped by face: +X, -X, +Y, -Y, +Z, -Z.
pub const CUBE_POSITIONS: [Vec3; VERTS_PER_CUBE] = [
    // +X face
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    // -X face
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    // +Y face
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    // -Y face
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    // +Z face
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    // -Z face
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
];

/// Prototype vertex normals, matching [`CUBE_POSITIONS`] face by face.
pub const CUBE_NORMALS: [Vec3; VERTS_PER_CUBE] = [
    Vec3::X,
    Vec3::X,
    Vec3::X,
    Vec3::X,
    Vec3::NEG_X,
    Vec3::NEG_X,
    Vec3::NEG_X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::Y,
    Vec3::Y,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::NEG_Y,
    Vec3::NEG_Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::Z,
    Vec3::Z,
    Vec3::Z,
    Vec3::NEG_Z,
    Vec3::NEG_Z,
    Vec3::NEG_Z,
    Vec3::NEG_Z,
];

/// Prototype triangle indices: two CCW triangles per face quad.
pub const CUBE_INDICES: [u32; INDICES_PER_CUBE] = [
    0, 1, 2, 0, 2, 3, // +X
    4, 5, 6, 4, 6, 7, // -X
    8, 9, 10, 8, 10, 11, // +Y
    12, 13, 14, 12, 14, 15, // -Y
    16, 17, 18, 16, 18, 19, // +Z
    20, 21, 22, 20, 22, 23, // -Z
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototype_spans_unit_cube() {
        for v in CUBE_POSITIONS {
            for c in [v.x, v.y, v.z] {
                assert!((c - 0.5).abs() < 1e-7 || (c + 0.5).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn test_indices_are_in_range() {
        for &i in &CUBE_INDICES {
            assert!((i as usize) < VERTS_PER_CUBE);
        }
    }

    #[test]
    fn test_normals_are_unit_axes() {
        for n in CUBE_NORMALS {
            assert!((n.length() - 1.0).abs() < 1e-7);
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        // For every triangle, the geometric normal must agree with the
        // stored vertex normal (CCW from outside).
        for tri in CUBE_INDICES.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let geometric = (CUBE_POSITIONS[b] - CUBE_POSITIONS[a])
                .cross(CUBE_POSITIONS[c] - CUBE_POSITIONS[a])
                .normalize();
            assert!(geometric.dot(CUBE_NORMALS[a]) > 0.99);
        }
    }

    #[test]
    fn test_each_face_uses_its_own_vertices() {
        for (face, tri_block) in CUBE_INDICES.chunks_exact(6).enumerate() {
            for &i in tri_block {
                assert_eq!((i as usize) / 4, face);
            }
        }
    }
}
