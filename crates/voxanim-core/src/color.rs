//! Voxel colors and material identity.

use serde::{Deserialize, Serialize};

/// A 4-component voxel color.
///
/// Colors derive deterministically from a cell's intensity: a value `v`
/// yields `(v, v, v, v)`, grayscale with intensity-proportional alpha.
///
/// Material identity is *exact* component equality (see [`Self::key`]). This
/// is deliberately bit-exact: two decode paths that round differently will
/// produce distinct materials even for visually identical colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoxelColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VoxelColor {
    /// The uniform material used in flattened merge mode: opaque mid-gray.
    pub const DEFAULT: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    /// Creates a color from explicit components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Derives the color for a cell with intensity `v`.
    #[must_use]
    pub const fn from_intensity(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Returns the bit-exact material key for this color.
    ///
    /// Two voxels share a material iff their keys are equal. Keys are the
    /// raw bit patterns of the four components, so they are hashable and
    /// free of float-comparison surprises (NaN included).
    #[must_use]
    pub fn key(&self) -> [u32; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }

    /// Returns the components as an array, for handoff to renderers.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_intensity_is_grayscale_with_alpha() {
        let c = VoxelColor::from_intensity(0.75);
        assert_eq!(c.to_array(), [0.75, 0.75, 0.75, 0.75]);
    }

    #[test]
    fn test_key_is_exact() {
        let a = VoxelColor::from_intensity(0.5);
        let b = VoxelColor::from_intensity(0.5);
        assert_eq!(a.key(), b.key());

        // One ULP apart is a different material.
        let c = VoxelColor::from_intensity(f32::from_bits(0.5f32.to_bits() + 1));
        assert_ne!(a.key(), c.key());
    }
}
