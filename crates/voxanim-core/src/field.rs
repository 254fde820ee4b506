//! Dense cubic scalar fields.

use crate::error::{Result, VoxanimError};

/// A dense N x N x N field of normalized intensity samples.
///
/// Values are stored row-major with x fastest: the sample for cell
/// `(x, y, z)` lives at index `x + y*N + z*N*N`. Fields are immutable once
/// constructed and may be dropped as soon as voxels have been extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    dim: u32,
    values: Vec<f32>,
}

impl ScalarField {
    /// Creates a field from already-normalized values.
    ///
    /// # Errors
    /// Fails if `dim` is zero or `values.len() != dim^3`.
    pub fn from_values(dim: u32, values: Vec<f32>) -> Result<Self> {
        if dim == 0 {
            return Err(VoxanimError::InvalidDimension(dim));
        }
        let expected = (dim as usize).pow(3);
        if values.len() != expected {
            return Err(VoxanimError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { dim, values })
    }

    /// Decodes a field from a dense byte array, one byte per cell.
    ///
    /// The layout matches [`Self::index`]: x fastest, y next, z slowest.
    /// Each byte is mapped to [0, 1] by dividing by 255. The byte count must
    /// equal `dim^3` exactly; short or long input is rejected.
    pub fn from_bytes(dim: u32, bytes: &[u8]) -> Result<Self> {
        if dim == 0 {
            return Err(VoxanimError::InvalidDimension(dim));
        }
        let expected = (dim as usize).pow(3);
        if bytes.len() != expected {
            return Err(VoxanimError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let values = bytes.iter().map(|&b| f32::from(b) / 255.0).collect();
        Ok(Self { dim, values })
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Returns the total number of cells, `N^3`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the field holds no cells. Construction requires a
    /// nonzero dimension, so this is always false for a built field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flattens a 3D cell coordinate to a linear index.
    #[must_use]
    pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
        let dim = self.dim as usize;
        (x as usize) + (y as usize) * dim + (z as usize) * dim * dim
    }

    /// Returns the sample at `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if any coordinate is out of range.
    #[must_use]
    pub fn value(&self, x: u32, y: u32, z: u32) -> f32 {
        assert!(
            x < self.dim && y < self.dim && z < self.dim,
            "cell ({x}, {y}, {z}) out of range for dimension {}",
            self.dim
        );
        self.values[self.index(x, y, z)]
    }

    /// Returns the raw flattened samples.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
