//! Frame timing.
//!
//! The session and animator take time as plain seconds so they can be driven
//! deterministically in tests. [`FrameClock`] is the wall-clock source the
//! window uses to produce those seconds.
//!
//! Seconds are `f32` counted from startup, so resolution degrades in very
//! long sessions: after about a day and a half adjacent values are ~8 ms
//! apart, which makes the 1/30 s gesture slots and the bobbing visibly
//! coarse. Like the per-frame smoothing, this is accepted for an
//! interactive piece that is restarted between showings.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//! // once per redraw:
//! let now = clock.tick();
//! if let Some(fps) = clock.take_fps_sample() {
//!     log::debug!("{fps:.1} fps");
//! }
//! ```

use std::time::{Duration, Instant};

/// Elapsed time, frame count and a periodic FPS estimate.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    fps_fresh: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            fps_fresh: false,
        }
    }

    /// Mark the start of a frame and return seconds since startup.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            self.fps_fresh = true;
        }

        self.elapsed_secs
    }

    /// Seconds since startup as of the last tick.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// The FPS estimate, once per update interval.
    pub fn take_fps_sample(&mut self) -> Option<f32> {
        std::mem::take(&mut self.fps_fresh).then_some(self.fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
