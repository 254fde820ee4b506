//! Configuration for the voxanim pipeline.
//!
//! All configuration is carried in explicit structs passed into the pipeline
//! entry points; there is no process-wide settings holder. Configuration is
//! validated up front so builds fail before any allocation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxanimError};

/// Whether a merged frame keeps one submesh per material or flattens
/// everything into a single topology list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MergeMode {
    /// One submesh per distinct voxel color, preserving per-voxel materials.
    #[default]
    PerMaterial,
    /// All voxels pooled into one submesh with a single uniform material.
    Flattened,
}

/// Configuration for building voxel meshes from scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Edge length of one voxel cube in world units.
    pub voxel_size: f32,

    /// Cells with a value at or above this threshold become voxels
    /// (boundary inclusive). Must lie within [0, 1].
    pub threshold: f32,

    /// Submesh layout of the merged mesh.
    pub merge_mode: MergeMode,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            voxel_size: 1.0,
            threshold: 0.4,
            merge_mode: MergeMode::PerMaterial,
        }
    }
}

impl BuildConfig {
    /// Checks that all fields hold usable values.
    ///
    /// Called by every pipeline entry point before any work is done.
    pub fn validate(&self) -> Result<()> {
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(VoxanimError::InvalidVoxelSize(self.voxel_size));
        }
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(VoxanimError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Configuration for animation playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Sweeps per second: a full pass over all frames takes `1 / speed`
    /// seconds. Typical values lie in 0.25 to 2.0.
    pub speed: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: 0.25 }
    }
}

impl PlaybackConfig {
    /// Checks that the playback speed is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(VoxanimError::InvalidPlaybackSpeed(self.speed));
        }
        Ok(())
    }
}
