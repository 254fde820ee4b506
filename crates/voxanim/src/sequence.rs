//! Building and stepping through a sequence of frames.

use std::time::Instant;

use rayon::prelude::*;
use voxanim_core::{BuildConfig, Result, ScalarField};
use voxanim_mesh::build_mesh;

use crate::frame::Frame;

/// An ordered set of animation frames with exactly one visible at a time.
///
/// Frames are independent, so the batch build runs them in parallel. After
/// the build the sequence owns all meshes for the session; selection and
/// stepping only flip visibility flags.
#[derive(Debug)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    current: usize,
}

impl FrameSequence {
    /// Builds one frame per scalar field, in parallel, and makes the first
    /// frame visible.
    ///
    /// # Errors
    /// Fails if the configuration does not validate or any frame's build
    /// fails; no partial sequence is returned.
    pub fn build(fields: &[ScalarField], config: &BuildConfig) -> Result<Self> {
        config.validate()?;
        let start = Instant::now();

        let meshes = fields
            .par_iter()
            .map(|field| build_mesh(field, config))
            .collect::<Result<Vec<_>>>()?;
        let mut frames: Vec<Frame> = meshes.into_iter().map(Frame::new).collect();

        if let Some(first) = frames.first_mut() {
            first.set_visible(true);
        }
        log::info!("built {} frames in {:.2?}", frames.len(), start.elapsed());

        Ok(Self { frames, current: 0 })
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the sequence holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the index of the currently visible frame.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the frame at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Returns all frames in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Makes the frame at `index` the visible one. Out-of-range indices are
    /// clamped to the last frame.
    pub fn select(&mut self, index: usize) {
        if self.frames.is_empty() {
            return;
        }
        let index = index.min(self.frames.len() - 1);
        self.frames[self.current].set_visible(false);
        self.frames[index].set_visible(true);
        self.current = index;
    }

    /// Advances to the next frame, stopping at the last one.
    pub fn step_forward(&mut self) {
        self.select(self.current.saturating_add(1));
    }

    /// Steps back to the previous frame, stopping at the first one.
    pub fn step_back(&mut self) {
        self.select(self.current.saturating_sub(1));
    }
}
