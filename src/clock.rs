/// Frame-rate governor.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    /// A clock that ticks at most `tps` times per second.
    pub fn new(tps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / tps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the next tick boundary, then return the seconds elapsed
    /// since the previous call.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
