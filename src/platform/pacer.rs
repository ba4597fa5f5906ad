//! Fixed-rate tick pacing
//!
//! Caps the loop at the target rate by sleeping out the remainder of each tick
//! and reports how long the tick actually took. Call it after the frame has
//! been presented: time spent waiting on the swap counts toward the tick, and a
//! tick that already ran long does not sleep at all.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FramePacer {
    tick_duration: Duration,
    last_boundary: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick_duration: Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64),
            last_boundary: Instant::now(),
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Block until the next tick boundary; returns the elapsed tick time in seconds
    pub fn finish_tick(&mut self) -> f32 {
        let elapsed = self.last_boundary.elapsed();
        if let Some(remaining) = self.tick_duration.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_boundary);
        self.last_boundary = now;
        dt.as_secs_f32()
    }
}
