//! Error types for voxanim.

use thiserror::Error;

/// The main error type for voxanim operations.
#[derive(Error, Debug)]
pub enum VoxanimError {
    /// The configured voxel size is not a positive finite number.
    #[error("invalid voxel size {0} - must be positive and finite")]
    InvalidVoxelSize(f32),

    /// The configured threshold is outside [0, 1] or not a number.
    #[error("invalid threshold {0} - must be within [0, 1]")]
    InvalidThreshold(f32),

    /// The configured playback speed is not a positive finite number.
    #[error("invalid playback speed {0} - must be positive and finite")]
    InvalidPlaybackSpeed(f32),

    /// A grid dimension of zero was given.
    #[error("invalid grid dimension {0} - must be at least 1")]
    InvalidDimension(u32),

    /// Input data length does not match the declared grid dimensions.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A merged mesh would exceed the addressable vertex or index range.
    #[error(
        "mesh size of {vertices} vertices / {indices} indices exceeds the \
         maximum addressable count {max}"
    )]
    IndexOverflow {
        vertices: usize,
        indices: usize,
        max: u64,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for voxanim operations.
pub type Result<T> = std::result::Result<T, VoxanimError>;
