//! voxanim: animated voxel meshes from volumetric scalar data.
//!
//! voxanim turns a time series of dense 3D scalar fields into one optimized
//! render mesh per frame: cells at or above a threshold become unit cubes,
//! cubes are grouped by exact color, and each group is merged into a
//! contiguous submesh of a single indexed mesh. Frames are built once (in
//! parallel) and toggled visible during playback.
//!
//! # Quick Start
//!
//! ```
//! use voxanim::{BuildConfig, FrameSequence, ScalarField};
//!
//! fn main() -> voxanim::Result<()> {
//!     // Decode one 4^3 frame from raw bytes (x-fastest, one byte per cell).
//!     let bytes = vec![200u8; 64];
//!     let field = ScalarField::from_bytes(4, &bytes)?;
//!
//!     let config = BuildConfig::default();
//!     let sequence = FrameSequence::build(&[field], &config)?;
//!
//!     let mesh = sequence.get(0).unwrap().mesh();
//!     assert_eq!(mesh.vertex_count(), 64 * 24);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`ScalarField`] - a dense N^3 grid of [0, 1] intensities
//! - [`spawn_voxels`](voxanim_mesh::spawn_voxels) - threshold into instances
//! - [`partition_by_color`](voxanim_mesh::partition_by_color) - material groups
//! - [`build_mesh`](voxanim_mesh::build_mesh) - one merged [`VoxelMesh`] per frame
//! - [`FrameSequence`] / [`Playback`] - session frames and the tick scheduler
//!
//! Rendering and UI are external collaborators: a [`VoxelMesh`] exposes
//! plain position/normal/index arrays (plus byte views) and per-submesh
//! descriptors, and imposes nothing else on the consumer.

mod frame;
mod playback;
mod sequence;

pub use frame::Frame;
pub use playback::{Playback, PlaybackState};
pub use sequence::FrameSequence;

// Re-export core types
pub use voxanim_core::{
    Aabb, BuildConfig, MergeMode, PlaybackConfig, Result, ScalarField, VoxanimError, VoxelColor,
};

// Re-export the mesh pipeline surface
pub use voxanim_mesh::{MeshBuffer, Submesh, VoxelMesh};

// Re-export glam types for convenience
pub use glam::{Mat4, UVec3, Vec3, Vec4};

/// Initializes logging from the environment (`RUST_LOG`).
///
/// Optional convenience for binaries and demos; library code only uses the
/// `log` facade. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
