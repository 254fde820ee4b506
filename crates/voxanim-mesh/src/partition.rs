//! Grouping voxel instances by material.

use std::collections::HashMap;

use voxanim_core::VoxelColor;

use crate::spawn::VoxelInstance;

/// All voxel instances sharing one exact color, in spawn order.
#[derive(Debug, Clone)]
pub struct MaterialGroup {
    /// The shared material color.
    pub color: VoxelColor,
    /// Member instances, preserving their input order.
    pub instances: Vec<VoxelInstance>,
}

/// Partitions `instances` into material groups.
///
/// Instances are scanned in input order; the first occurrence of a new color
/// appends a new group, so group order is discovery order and determines the
/// final submesh order. Membership is exact: every instance lands in exactly
/// one group and no instance is dropped or duplicated.
///
/// Lookup is a hash on the color's bit pattern, which preserves the
/// exact-equality semantics of a linear color scan.
#[must_use]
pub fn partition_by_color(instances: Vec<VoxelInstance>) -> Vec<MaterialGroup> {
    let mut group_of: HashMap<[u32; 4], usize> = HashMap::new();
    let mut groups: Vec<MaterialGroup> = Vec::new();

    for instance in instances {
        let slot = *group_of.entry(instance.color.key()).or_insert_with(|| {
            groups.push(MaterialGroup {
                color: instance.color,
                instances: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].instances.push(instance);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;
    use proptest::prelude::*;

    fn instance(x: u32, intensity: f32) -> VoxelInstance {
        VoxelInstance {
            coord: UVec3::new(x, 0, 0),
            color: VoxelColor::from_intensity(intensity),
        }
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(partition_by_color(Vec::new()).is_empty());
    }

    #[test]
    fn test_groups_follow_discovery_order() {
        let input = vec![
            instance(0, 0.9),
            instance(1, 0.5),
            instance(2, 0.9),
            instance(3, 0.7),
        ];
        let groups = partition_by_color(input);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].color, VoxelColor::from_intensity(0.9));
        assert_eq!(groups[1].color, VoxelColor::from_intensity(0.5));
        assert_eq!(groups[2].color, VoxelColor::from_intensity(0.7));
        assert_eq!(groups[0].instances.len(), 2);
        assert_eq!(groups[0].instances[1].coord, UVec3::new(2, 0, 0));
    }

    #[test]
    fn test_single_color_collapses_to_one_group() {
        let input: Vec<_> = (0..10).map(|x| instance(x, 0.3)).collect();
        let groups = partition_by_color(input);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].instances.len(), 10);
    }

    proptest! {
        #[test]
        fn prop_partition_is_exact(intensities in proptest::collection::vec(0.0f32..=1.0, 0..50)) {
            let input: Vec<_> = intensities
                .iter()
                .enumerate()
                .map(|(x, &v)| instance(x as u32, v))
                .collect();

            let groups = partition_by_color(input.clone());

            // Union of groups equals the input, no duplicates, no omissions.
            let total: usize = groups.iter().map(|g| g.instances.len()).sum();
            prop_assert_eq!(total, input.len());

            let mut distinct: Vec<[u32; 4]> =
                input.iter().map(|i| i.color.key()).collect();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(groups.len(), distinct.len());

            for group in &groups {
                for member in &group.instances {
                    prop_assert_eq!(member.color.key(), group.color.key());
                }
            }
        }
    }
}
