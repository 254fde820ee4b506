//! Tick-driven animation playback.

use voxanim_core::{PlaybackConfig, Result};

/// Playback lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No sweep in progress.
    Idle,
    /// A sweep is advancing through the frames.
    Running,
    /// The sweep finished and the initial frame was restored.
    Finished,
}

/// A cooperative scheduler that sweeps once through all frames.
///
/// The scheduler is pure tick arithmetic: the caller drives it from its own
/// loop at a fixed tick rate and applies the returned frame indices to a
/// [`FrameSequence`](crate::FrameSequence). Each of the `frame_count` frames
/// is shown for `1 / (speed * frame_count)` seconds, so the frames
/// themselves span `1 / speed` seconds regardless of frame count; the
/// restore of the frame that was current at [`start`](Self::start) then
/// holds one extra interval, for `frame_count + 1` intervals total.
///
/// Playback never touches the merge pipeline - meshes are built before any
/// playback begins.
#[derive(Debug)]
pub struct Playback {
    ticks_per_frame: u32,
    frame_count: usize,
    elapsed: u32,
    next_frame: usize,
    initial_frame: usize,
    state: PlaybackState,
}

impl Playback {
    /// Creates a scheduler for `frame_count` frames driven at `tick_rate`
    /// ticks per second.
    ///
    /// # Errors
    /// Fails if the playback speed does not validate.
    pub fn new(config: &PlaybackConfig, frame_count: usize, tick_rate: u32) -> Result<Self> {
        config.validate()?;
        // Frame interval so one sweep lasts 1/speed seconds.
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ticks_per_frame = if frame_count == 0 {
            1
        } else {
            let interval = tick_rate as f32 / (config.speed * frame_count as f32);
            (interval.round() as u32).max(1)
        };
        Ok(Self {
            ticks_per_frame,
            frame_count,
            elapsed: 0,
            next_frame: 0,
            initial_frame: 0,
            state: PlaybackState::Idle,
        })
    }

    /// Begins a sweep from frame 0, remembering `current_frame` to restore
    /// when the sweep completes. Does nothing for an empty sequence.
    pub fn start(&mut self, current_frame: usize) {
        if self.frame_count == 0 {
            return;
        }
        self.initial_frame = current_frame;
        self.next_frame = 0;
        self.elapsed = 0;
        self.state = PlaybackState::Running;
    }

    /// Advances one tick. Returns the frame index to display when a frame
    /// boundary is crossed, otherwise `None`.
    ///
    /// The final boundary yields the remembered initial frame and moves the
    /// scheduler to [`PlaybackState::Finished`].
    pub fn tick(&mut self) -> Option<usize> {
        if self.state != PlaybackState::Running {
            return None;
        }
        self.elapsed += 1;
        if self.elapsed < self.ticks_per_frame {
            return None;
        }
        self.elapsed = 0;

        if self.next_frame < self.frame_count {
            let frame = self.next_frame;
            self.next_frame += 1;
            Some(frame)
        } else {
            self.state = PlaybackState::Finished;
            Some(self.initial_frame)
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns true while a sweep is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Returns the tick count between frame boundaries.
    #[must_use]
    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }
}
