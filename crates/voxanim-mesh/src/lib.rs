//! Voxel mesh pipeline for voxanim.
//!
//! This crate turns a [`ScalarField`](voxanim_core::ScalarField) into one
//! indexed render mesh:
//!
//! 1. [`spawn_voxels`] - threshold the field into plain-data voxel instances
//! 2. [`partition_by_color`] - group instances by exact material color
//! 3. [`merge_group`] / [`assemble`] - transform-and-copy every instance's
//!    cube into contiguous, disjoint slices of one big buffer
//!
//! [`build_mesh`] runs the whole pipeline for one frame. All transient
//! per-voxel data is consumed by the merge; only the final [`VoxelMesh`]
//! survives.

// Vertex counts fit u32 by construction (checked before allocation), so the
// index casts below cannot truncate.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod cube;
pub mod merge;
pub mod mesh;
pub mod partition;
pub mod spawn;

pub use buffer::MeshBuffer;
pub use cube::{CUBE_INDICES, CUBE_NORMALS, CUBE_POSITIONS, INDICES_PER_CUBE, VERTS_PER_CUBE};
pub use merge::{assemble, build_mesh, merge_group};
pub use mesh::{Submesh, VoxelMesh};
pub use partition::{partition_by_color, MaterialGroup};
pub use spawn::{spawn_voxels, VoxelInstance};
