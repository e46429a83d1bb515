//! Frame timing for the application loop
//!
//! The clock works entirely on millisecond tick values supplied by the
//! presentation backend, which keeps it deterministic under test.

/// Frame-rate regulator for the application loop
///
/// Tracks the simulation step size (`delta_time`) and the per-frame budget
/// derived from the target frame rate. The step starts at `1 / target_fps`
/// and is recomputed once per second as `1 / frames_elapsed`, so it drifts
/// with the measured frame rate rather than staying fixed.
pub struct FrameClock {
    target_fps: f32,
    delta_time: f32,
    frames_elapsed: u64,
    last_mark_ms: u64,
}

impl FrameClock {
    /// Create a clock targeting `target_fps`, starting at tick `now_ms`
    pub fn new(target_fps: f32, now_ms: u64) -> Self {
        Self {
            target_fps,
            delta_time: 1.0 / target_fps,
            frames_elapsed: 0,
            last_mark_ms: now_ms,
        }
    }

    /// Current simulation step size in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Per-frame budget in milliseconds
    pub fn budget_ms(&self) -> f32 {
        1000.0 / self.target_fps
    }

    /// Remaining delay for a frame that took `elapsed_ms`, or zero on overrun
    ///
    /// There is no catch-up: an overrunning frame simply runs long.
    pub fn remaining_delay_ms(&self, elapsed_ms: u64) -> u64 {
        let budget = self.budget_ms();
        if (elapsed_ms as f32) < budget {
            (budget - elapsed_ms as f32) as u64
        } else {
            0
        }
    }

    /// Record a finished frame
    ///
    /// `current_ms` is the tick taken before the end-of-frame delay and
    /// `now_ms` the tick after it. If more than a second has passed since the
    /// last mark, the step size is recomputed from the measured frame count.
    pub fn frame_finished(&mut self, current_ms: u64, now_ms: u64) {
        self.frames_elapsed += 1;
        if current_ms > self.last_mark_ms + 1000 {
            self.delta_time = 1.0 / self.frames_elapsed as f32;
            self.frames_elapsed = 0;
            self.last_mark_ms = now_ms;
        }
    }
}
