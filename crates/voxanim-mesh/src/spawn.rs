//! Thresholding a scalar field into voxel instances.

use glam::{Mat4, UVec3, Vec3};
use voxanim_core::{BuildConfig, Result, ScalarField, VoxelColor};

/// One above-threshold cell, as plain data.
///
/// Instances are ephemeral: the spawner produces them, the merger consumes
/// them, and nothing survives a frame build. Geometry is only materialized
/// at merge time - there is never a live object per voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelInstance {
    /// Grid coordinate of the cell.
    pub coord: UVec3,
    /// Material color derived from the cell's intensity.
    pub color: VoxelColor,
}

impl VoxelInstance {
    /// World-space position of the cube center: `coord * voxel_size`.
    #[must_use]
    pub fn world_position(&self, voxel_size: f32) -> Vec3 {
        self.coord.as_vec3() * voxel_size
    }

    /// World transform of this instance: translation times uniform scale.
    /// No rotation in this system.
    #[must_use]
    pub fn transform(&self, voxel_size: f32) -> Mat4 {
        Mat4::from_translation(self.world_position(voxel_size))
            * Mat4::from_scale(Vec3::splat(voxel_size))
    }
}

/// Walks all cells of `field` and emits an instance for every cell whose
/// value is at or above the configured threshold (boundary inclusive).
///
/// Cells are visited z-outer / y-middle / x-inner, matching the field's
/// flattening order, so the output order is deterministic.
///
/// # Errors
/// Fails if `config` does not validate. Spawning itself cannot fail.
pub fn spawn_voxels(field: &ScalarField, config: &BuildConfig) -> Result<Vec<VoxelInstance>> {
    config.validate()?;

    let dim = field.dim();
    let mut instances = Vec::new();
    for z in 0..dim {
        for y in 0..dim {
            for x in 0..dim {
                let v = field.value(x, y, z);
                if v >= config.threshold {
                    instances.push(VoxelInstance {
                        coord: UVec3::new(x, y, z),
                        color: VoxelColor::from_intensity(v),
                    });
                }
            }
        }
    }

    log::debug!(
        "spawned {} voxels of {} cells (threshold {})",
        instances.len(),
        field.len(),
        config.threshold
    );
    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(threshold: f32) -> BuildConfig {
        BuildConfig {
            threshold,
            ..BuildConfig::default()
        }
    }

    #[test]
    fn test_all_zero_field_spawns_nothing() {
        let field = ScalarField::from_values(4, vec![0.0; 64]).unwrap();
        let instances = spawn_voxels(&field, &config(0.1)).unwrap();
        assert!(instances.is_empty());
    }

    #[test]
    fn test_all_one_field_spawns_everything_at_zero_threshold() {
        let field = ScalarField::from_values(4, vec![1.0; 64]).unwrap();
        let instances = spawn_voxels(&field, &config(0.0)).unwrap();
        assert_eq!(instances.len(), 64);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let mut values = vec![0.0; 8];
        values[3] = 0.4;
        let field = ScalarField::from_values(2, values).unwrap();
        let instances = spawn_voxels(&field, &config(0.4)).unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].coord, UVec3::new(1, 1, 0));
    }

    #[test]
    fn test_spawn_order_matches_flattening() {
        let field = ScalarField::from_values(2, vec![1.0; 8]).unwrap();
        let instances = spawn_voxels(&field, &config(0.5)).unwrap();
        let coords: Vec<UVec3> = instances.iter().map(|i| i.coord).collect();
        assert_eq!(coords[0], UVec3::new(0, 0, 0));
        assert_eq!(coords[1], UVec3::new(1, 0, 0));
        assert_eq!(coords[2], UVec3::new(0, 1, 0));
        assert_eq!(coords[7], UVec3::new(1, 1, 1));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let field = ScalarField::from_values(2, vec![0.0; 8]).unwrap();
        let bad = BuildConfig {
            voxel_size: -1.0,
            ..BuildConfig::default()
        };
        assert!(spawn_voxels(&field, &bad).is_err());
    }

    #[test]
    fn test_world_transform() {
        let inst = VoxelInstance {
            coord: UVec3::new(2, 0, 1),
            color: VoxelColor::from_intensity(1.0),
        };
        assert_eq!(inst.world_position(2.0), Vec3::new(4.0, 0.0, 2.0));
        let p = inst.transform(2.0).transform_point3(Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(p, Vec3::new(5.0, 1.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_instance_count_equals_cells_at_or_above_threshold(
            values in proptest::collection::vec(0.0f32..=1.0, 27),
            threshold in 0.0f32..=1.0,
        ) {
            let expected = values.iter().filter(|&&v| v >= threshold).count();
            let field = ScalarField::from_values(3, values).unwrap();
            let instances = spawn_voxels(&field, &config(threshold)).unwrap();
            prop_assert_eq!(instances.len(), expected);
        }
    }
}
