//! A single animation frame.

use voxanim_mesh::VoxelMesh;

/// One fully merged frame of the animation.
///
/// Frames are built once at startup and retained for the whole session;
/// playback only toggles visibility, it never rebuilds geometry.
#[derive(Debug, Clone)]
pub struct Frame {
    mesh: VoxelMesh,
    visible: bool,
}

impl Frame {
    pub(crate) fn new(mesh: VoxelMesh) -> Self {
        Self {
            mesh,
            visible: false,
        }
    }

    /// Returns the frame's merged mesh.
    #[must_use]
    pub fn mesh(&self) -> &VoxelMesh {
        &self.mesh
    }

    /// Returns whether the frame is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
