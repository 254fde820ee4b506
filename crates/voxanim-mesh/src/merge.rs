//! Merging voxel instances into one indexed mesh.
//!
//! Both merge stages use the same disjoint-slice transform-and-copy scheme:
//! output sizes are precomputed, buffers are allocated once, and every
//! writer owns a statically-computed, non-overlapping slice of the output.
//! That makes the fill embarrassingly parallel; the only cross-writer state
//! is the bounding-box reduction, a plain min/max fold.
//!
//! [`merge_group`] runs the scheme at per-instance granularity,
//! [`assemble`] at per-group granularity, and [`build_mesh`] chains the
//! whole pipeline for one frame.

use std::time::Instant;

use glam::{Mat3, Vec3};
use rayon::prelude::*;
use voxanim_core::{Aabb, BuildConfig, MergeMode, Result, ScalarField, VoxanimError, VoxelColor};

use crate::buffer::MeshBuffer;
use crate::cube::{CUBE_INDICES, CUBE_NORMALS, CUBE_POSITIONS, INDICES_PER_CUBE, VERTS_PER_CUBE};
use crate::mesh::{Submesh, VoxelMesh};
use crate::partition::partition_by_color;
use crate::spawn::{spawn_voxels, VoxelInstance};

/// Fails if `vertex_count` or `index_count` exceeds the u32 range.
///
/// Indices outnumber vertices 36:24 per cube, so the index array overflows
/// first; both totals are checked before any allocation so an oversized
/// frame fails cleanly instead of wrapping its submesh offsets mid-fill.
fn check_index_capacity(vertex_count: usize, index_count: usize) -> Result<()> {
    let max = u64::from(u32::MAX);
    if vertex_count as u64 > max || index_count as u64 > max {
        return Err(VoxanimError::IndexOverflow {
            vertices: vertex_count,
            indices: index_count,
            max,
        });
    }
    Ok(())
}

/// Writes one instance's transformed cube into its output slices and
/// returns the bounds of the written vertices.
fn write_instance(
    instance: &VoxelInstance,
    voxel_size: f32,
    vertex_base: u32,
    positions: &mut [Vec3],
    normals: &mut [Vec3],
    indices: &mut [u32],
) -> Aabb {
    let transform = instance.transform(voxel_size);
    // Normals go through the linear part only, then renormalize so the
    // uniform scale does not leak into their length.
    let normal_transform = Mat3::from_mat4(transform);

    let mut bounds = Aabb::EMPTY;
    for (dst, src) in positions.iter_mut().zip(&CUBE_POSITIONS) {
        let p = transform.transform_point3(*src);
        bounds.include_point(p);
        *dst = p;
    }
    for (dst, src) in normals.iter_mut().zip(&CUBE_NORMALS) {
        *dst = (normal_transform * *src).normalize_or_zero();
    }
    for (dst, src) in indices.iter_mut().zip(&CUBE_INDICES) {
        *dst = vertex_base + src;
    }
    bounds
}

/// Merges the cubes of all `instances` into one [`MeshBuffer`].
///
/// Output sizes are the instance count times the prototype sizes; the buffer
/// is allocated up front and filled in parallel, each instance writing its
/// own slice. Instance order is preserved in the output layout, so the
/// result is deterministic.
///
/// # Errors
/// Fails with [`VoxanimError::IndexOverflow`] if the total vertex or index
/// count exceeds the u32 range.
pub fn merge_group(instances: &[VoxelInstance], voxel_size: f32) -> Result<MeshBuffer> {
    let total_verts = instances.len() * VERTS_PER_CUBE;
    let total_indices = instances.len() * INDICES_PER_CUBE;
    check_index_capacity(total_verts, total_indices)?;

    let mut buf = MeshBuffer::with_size(total_verts, total_indices);
    let bounds = buf
        .positions
        .par_chunks_exact_mut(VERTS_PER_CUBE)
        .zip(buf.normals.par_chunks_exact_mut(VERTS_PER_CUBE))
        .zip(buf.indices.par_chunks_exact_mut(INDICES_PER_CUBE))
        .zip(instances.par_iter())
        .enumerate()
        .map(|(slot, (((positions, normals), indices), instance))| {
            let vertex_base = (slot * VERTS_PER_CUBE) as u32;
            write_instance(instance, voxel_size, vertex_base, positions, normals, indices)
        })
        .reduce(|| Aabb::EMPTY, Aabb::union);
    buf.bounds = bounds;

    Ok(buf)
}

/// Concatenates per-group buffers into one [`VoxelMesh`], one submesh per
/// group.
///
/// This is the same disjoint-slice transform-and-copy as [`merge_group`],
/// now at group granularity: each group's geometry is copied into its
/// precomputed byte range with its indices rebased onto the combined vertex
/// array. Group order becomes submesh order.
///
/// # Errors
/// Fails with [`VoxanimError::IndexOverflow`] if the combined vertex or
/// index count exceeds the u32 range.
pub fn assemble(parts: Vec<(MeshBuffer, VoxelColor)>) -> Result<VoxelMesh> {
    let total_verts: usize = parts.iter().map(|(b, _)| b.vertex_count()).sum();
    let total_indices: usize = parts.iter().map(|(b, _)| b.index_count()).sum();
    check_index_capacity(total_verts, total_indices)?;

    // Per-part vertex bases and submesh descriptors from a prefix scan.
    let mut submeshes = Vec::with_capacity(parts.len());
    let mut vertex_bases = Vec::with_capacity(parts.len());
    let mut vertex_base = 0usize;
    let mut index_base = 0usize;
    let mut bounds = Aabb::EMPTY;
    for (buf, color) in &parts {
        vertex_bases.push(vertex_base as u32);
        submeshes.push(Submesh {
            index_offset: index_base as u32,
            index_count: buf.index_count() as u32,
            bounds: buf.bounds,
            color: *color,
        });
        bounds = bounds.union(buf.bounds);
        vertex_base += buf.vertex_count();
        index_base += buf.index_count();
    }

    let mut out = MeshBuffer::with_size(total_verts, total_indices);
    out.bounds = bounds;

    // Carve the output into per-part disjoint slices, then copy in parallel.
    let mut slices = Vec::with_capacity(parts.len());
    let mut pos_rest = out.positions.as_mut_slice();
    let mut nrm_rest = out.normals.as_mut_slice();
    let mut idx_rest = out.indices.as_mut_slice();
    for (buf, _) in &parts {
        let (pos, rest) = std::mem::take(&mut pos_rest).split_at_mut(buf.vertex_count());
        pos_rest = rest;
        let (nrm, rest) = std::mem::take(&mut nrm_rest).split_at_mut(buf.vertex_count());
        nrm_rest = rest;
        let (idx, rest) = std::mem::take(&mut idx_rest).split_at_mut(buf.index_count());
        idx_rest = rest;
        slices.push((pos, nrm, idx));
    }

    slices
        .into_par_iter()
        .zip(parts.par_iter())
        .zip(vertex_bases.par_iter())
        .for_each(|(((pos, nrm, idx), (buf, _)), &base)| {
            pos.copy_from_slice(&buf.positions);
            nrm.copy_from_slice(&buf.normals);
            for (dst, src) in idx.iter_mut().zip(&buf.indices) {
                *dst = base + src;
            }
        });

    Ok(VoxelMesh {
        buffer: out,
        submeshes,
    })
}

/// Builds one frame's merged mesh from a scalar field.
///
/// Runs spawn, partition (in per-material mode), per-group merge, and final
/// assembly. All transient voxel instances are consumed here; only the
/// returned mesh survives.
///
/// # Errors
/// Fails if the configuration does not validate or the frame exceeds the
/// addressable index range.
pub fn build_mesh(field: &ScalarField, config: &BuildConfig) -> Result<VoxelMesh> {
    config.validate()?;
    let start = Instant::now();

    let instances = spawn_voxels(field, config)?;
    let voxel_count = instances.len();

    let mesh = match config.merge_mode {
        MergeMode::PerMaterial => {
            let groups = partition_by_color(instances);
            log::debug!("{} material groups", groups.len());
            let parts = groups
                .iter()
                .map(|group| {
                    merge_group(&group.instances, config.voxel_size).map(|buf| (buf, group.color))
                })
                .collect::<Result<Vec<_>>>()?;
            assemble(parts)?
        }
        MergeMode::Flattened => {
            let buf = merge_group(&instances, config.voxel_size)?;
            assemble(vec![(buf, VoxelColor::DEFAULT)])?
        }
    };

    log::info!(
        "built frame mesh: {} voxels, {} submeshes, {} vertices in {:.1?}",
        voxel_count,
        mesh.submeshes.len(),
        mesh.vertex_count(),
        start.elapsed()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;

    fn instance(coord: (u32, u32, u32), intensity: f32) -> VoxelInstance {
        VoxelInstance {
            coord: UVec3::new(coord.0, coord.1, coord.2),
            color: VoxelColor::from_intensity(intensity),
        }
    }

    #[test]
    fn test_index_capacity_precheck() {
        assert!(check_index_capacity(u32::MAX as usize, u32::MAX as usize).is_ok());
        assert!(matches!(
            check_index_capacity(u32::MAX as usize + 1, 0),
            Err(VoxanimError::IndexOverflow { .. })
        ));
    }

    #[test]
    fn test_index_count_overflow_is_caught() {
        // Indices outnumber vertices 36:24, so a frame can overflow the
        // index range while its vertex count still fits. ~130M cubes:
        // 3.1e9 vertices (fits u32) but 4.7e9 indices (does not).
        let instances = 130_000_000usize;
        let vertices = instances * VERTS_PER_CUBE;
        let indices = instances * INDICES_PER_CUBE;
        assert!(vertices <= u32::MAX as usize);
        assert!(indices > u32::MAX as usize);
        assert!(matches!(
            check_index_capacity(vertices, indices),
            Err(VoxanimError::IndexOverflow { .. })
        ));
    }

    #[test]
    fn test_single_instance_transform() {
        // A cube at grid (2, 0, 0) with size 1 spans x in [1.5, 2.5].
        let buf = merge_group(&[instance((2, 0, 0), 1.0)], 1.0).unwrap();
        assert_eq!(buf.vertex_count(), VERTS_PER_CUBE);
        assert_eq!(buf.index_count(), INDICES_PER_CUBE);
        for p in &buf.positions {
            assert!((1.5..=2.5).contains(&p.x));
            assert!((-0.5..=0.5).contains(&p.y));
            assert!((-0.5..=0.5).contains(&p.z));
        }
        assert_eq!(buf.bounds.min, Vec3::new(1.5, -0.5, -0.5));
        assert_eq!(buf.bounds.max, Vec3::new(2.5, 0.5, 0.5));
    }

    #[test]
    fn test_scaled_transform_keeps_normals_unit() {
        let buf = merge_group(&[instance((1, 2, 3), 0.8)], 2.5).unwrap();
        for n in &buf.normals {
            assert!((n.length() - 1.0).abs() < 1e-6);
        }
        // Position = prototype * size + coord * size.
        assert_eq!(buf.bounds.min, Vec3::new(1.25, 3.75, 6.25));
        assert_eq!(buf.bounds.max, Vec3::new(3.75, 6.25, 8.75));
    }

    #[test]
    fn test_geometry_conservation() {
        let instances: Vec<_> = (0..7).map(|x| instance((x, 0, 0), 0.9)).collect();
        let buf = merge_group(&instances, 1.0).unwrap();
        assert_eq!(buf.vertex_count(), 7 * VERTS_PER_CUBE);
        assert_eq!(buf.triangle_count(), 7 * INDICES_PER_CUBE / 3);
    }

    #[test]
    fn test_indices_are_offset_per_instance() {
        let instances = vec![instance((0, 0, 0), 0.9), instance((1, 0, 0), 0.9)];
        let buf = merge_group(&instances, 1.0).unwrap();
        let vc = buf.vertex_count() as u32;
        assert!(buf.indices.iter().all(|&i| i < vc));
        // Second instance's indices reference the second vertex block.
        assert!(buf.indices[INDICES_PER_CUBE..]
            .iter()
            .all(|&i| i >= VERTS_PER_CUBE as u32));
    }

    #[test]
    fn test_assemble_rebases_indices() {
        let a = merge_group(&[instance((0, 0, 0), 0.9)], 1.0).unwrap();
        let b = merge_group(&[instance((3, 0, 0), 0.5)], 1.0).unwrap();
        let mesh = assemble(vec![
            (a, VoxelColor::from_intensity(0.9)),
            (b, VoxelColor::from_intensity(0.5)),
        ])
        .unwrap();

        assert_eq!(mesh.vertex_count(), 2 * VERTS_PER_CUBE);
        assert_eq!(mesh.submeshes.len(), 2);
        assert_eq!(mesh.submeshes[0].index_offset, 0);
        assert_eq!(mesh.submeshes[1].index_offset, INDICES_PER_CUBE as u32);
        assert_eq!(mesh.submeshes[1].index_count, INDICES_PER_CUBE as u32);

        let vc = mesh.vertex_count() as u32;
        assert!(mesh.buffer.indices.iter().all(|&i| i < vc));
        assert_eq!(mesh.bounds().min, Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(mesh.bounds().max, Vec3::new(3.5, 0.5, 0.5));
    }

    #[test]
    fn test_assemble_empty_is_empty_mesh() {
        let mesh = assemble(Vec::new()).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.submeshes.is_empty());
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn test_build_mesh_per_material_vs_flattened() {
        // Two distinct intensities above threshold.
        let mut values = vec![0.0; 8];
        values[1] = 0.5;
        values[2] = 0.9;
        let field = ScalarField::from_values(2, values).unwrap();

        let per_material = build_mesh(
            &field,
            &BuildConfig {
                merge_mode: MergeMode::PerMaterial,
                ..BuildConfig::default()
            },
        )
        .unwrap();
        assert_eq!(per_material.submeshes.len(), 2);

        let flattened = build_mesh(
            &field,
            &BuildConfig {
                merge_mode: MergeMode::Flattened,
                ..BuildConfig::default()
            },
        )
        .unwrap();
        assert_eq!(flattened.submeshes.len(), 1);
        assert_eq!(flattened.submeshes[0].color, VoxelColor::DEFAULT);

        // Same total geometry either way.
        assert_eq!(per_material.vertex_count(), flattened.vertex_count());
        assert_eq!(per_material.triangle_count(), flattened.triangle_count());
    }

    #[test]
    fn test_build_mesh_is_deterministic() {
        let values: Vec<f32> = (0..64).map(|i| (i % 10) as f32 / 10.0).collect();
        let field = ScalarField::from_values(4, values).unwrap();
        let config = BuildConfig::default();

        let a = build_mesh(&field, &config).unwrap();
        let b = build_mesh(&field, &config).unwrap();

        assert_eq!(a.buffer.position_bytes(), b.buffer.position_bytes());
        assert_eq!(a.buffer.normal_bytes(), b.buffer.normal_bytes());
        assert_eq!(a.buffer.index_bytes(), b.buffer.index_bytes());
        assert_eq!(a.submeshes.len(), b.submeshes.len());
        for (sa, sb) in a.submeshes.iter().zip(&b.submeshes) {
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn test_build_mesh_rejects_invalid_config() {
        let field = ScalarField::from_values(2, vec![0.0; 8]).unwrap();
        let config = BuildConfig {
            threshold: 2.0,
            ..BuildConfig::default()
        };
        assert!(matches!(
            build_mesh(&field, &config),
            Err(VoxanimError::InvalidThreshold(_))
        ));
    }
}
