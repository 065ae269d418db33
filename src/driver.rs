//! Frame pacing
//!
//! Converts host frame deltas into a number of simulation ticks. The default
//! per-frame mode ticks once per frame regardless of elapsed time, so game
//! speed follows the display refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::tuning::TimingMode;

#[derive(Debug, Clone)]
pub struct FrameDriver {
    mode: TimingMode,
    accumulator: f32,
}

impl FrameDriver {
    pub fn new(mode: TimingMode) -> Self {
        Self {
            mode,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> TimingMode {
        self.mode
    }

    /// How many ticks to run for a frame that took `dt` seconds
    pub fn ticks_for_frame(&mut self, dt: f32) -> u32 {
        match self.mode {
            TimingMode::PerFrame => 1,
            TimingMode::FixedStep { .. } => {
                let step = self.mode.step_secs();
                let dt = if dt.is_finite() {
                    dt.clamp(0.0, MAX_FRAME_DT)
                } else {
                    0.0
                };
                self.accumulator += dt;

                let mut substeps = 0;
                while self.accumulator >= step && substeps < MAX_SUBSTEPS {
                    self.accumulator -= step;
                    substeps += 1;
                }
                // Drop backlog we refused to simulate
                if substeps == MAX_SUBSTEPS {
                    self.accumulator = self.accumulator.min(step);
                }
                substeps
            }
        }
    }

    /// Forget any partial step (on restart)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
