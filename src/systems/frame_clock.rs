//! Frame pacing
//!
//! The canvas advances in whole frames (particle lifetimes are counted in
//! frames), while redraws arrive as fast as the surface presents. The clock
//! turns elapsed wall time into the number of frames that are due.

use std::time::{Duration, Instant};

/// Converts wall time into due simulation frames
pub struct FrameClock {
    frame_duration: Duration,
    max_frames: u32,
    last_tick: Option<Instant>,
    accumulator: Duration,
}

impl FrameClock {
    /// Create a clock running at `frame_rate` frames per second
    pub fn new(frame_rate: f32, max_frames: u32) -> Self {
        let frame_rate = if frame_rate.is_finite() && frame_rate > 0.0 {
            frame_rate
        } else {
            log::warn!("Invalid frame rate {}, using 60", frame_rate);
            60.0
        };

        Self {
            frame_duration: Duration::from_secs_f32(1.0 / frame_rate),
            max_frames: max_frames.max(1),
            last_tick: None,
            accumulator: Duration::ZERO,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Forget elapsed time (e.g. after switching views)
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.accumulator = Duration::ZERO;
    }

    /// Frames due since the last call
    pub fn tick(&mut self) -> u32 {
        self.tick_at(Instant::now())
    }

    /// Frames due at `now`
    ///
    /// The first tick always yields one frame so a new view is drawn
    /// immediately. A backlog beyond `max_frames` is dropped rather than
    /// replayed.
    pub fn tick_at(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last_tick.replace(now) else {
            return 1;
        };

        self.accumulator += now.saturating_duration_since(last);

        let due = self.accumulator.as_nanos() / self.frame_duration.as_nanos().max(1);
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        if due > self.max_frames {
            self.accumulator = Duration::ZERO;
            return self.max_frames;
        }

        self.accumulator -= self.frame_duration * due;
        due
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60.0, 4)
    }
}
