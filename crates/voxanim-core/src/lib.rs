//! Core types for voxanim.
//!
//! This crate provides the fundamental types shared by the voxanim pipeline:
//! - [`ScalarField`] - a dense cubic grid of normalized intensity samples
//! - [`VoxelColor`] - the exact-equality material key derived from a sample
//! - [`Aabb`] - axis-aligned bounds with an associative union fold
//! - [`BuildConfig`] / [`PlaybackConfig`] - validated configuration
//! - [`VoxanimError`] - the workspace-wide error type

// Index math casts between u32/usize/f32 deliberately; grids are far below
// any truncation boundary.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod color;
pub mod config;
pub mod error;
pub mod field;

pub use bounds::Aabb;
pub use color::VoxelColor;
pub use config::{BuildConfig, MergeMode, PlaybackConfig};
pub use error::{Result, VoxanimError};
pub use field::ScalarField;

// Re-export glam types for convenience
pub use glam::{Mat3, Mat4, UVec3, Vec3, Vec4};
