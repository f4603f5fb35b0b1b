//! Clocks for pacing the loop.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use lantern_engine::Clock;

const FPS_WINDOW: usize = 10;

/// Wall-clock pacing. [`Clock::tick`] sleeps out the remainder of the frame
/// budget when the frame finished early, then reports the real elapsed
/// milliseconds, so dt stays variable under load.
pub struct SystemClock {
    last: Option<Instant>,
    recent_ms: VecDeque<f32>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: None,
            recent_ms: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    fn record(&mut self, ms: f32) {
        if self.recent_ms.len() == FPS_WINDOW {
            self.recent_ms.pop_front();
        }
        self.recent_ms.push_back(ms);
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        let budget_ms = if target_fps > 0 {
            1000.0 / target_fps as f32
        } else {
            0.0
        };

        let elapsed_ms = match self.last {
            // The first tick has nothing to measure against; report a
            // nominal frame.
            None => budget_ms,
            Some(prev) => {
                let so_far = prev.elapsed().as_secs_f32() * 1000.0;
                if so_far < budget_ms {
                    thread::sleep(Duration::from_secs_f32((budget_ms - so_far) / 1000.0));
                }
                prev.elapsed().as_secs_f32() * 1000.0
            }
        };

        self.last = Some(Instant::now());
        self.record(elapsed_ms);
        elapsed_ms
    }

    fn fps(&self) -> f32 {
        if self.recent_ms.is_empty() {
            return 0.0;
        }
        let avg = self.recent_ms.iter().sum::<f32>() / self.recent_ms.len() as f32;
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }
}

/// Fixed-step clock for deterministic runs. Never sleeps; every tick
/// reports the same duration regardless of the target rate.
pub struct ManualClock {
    dt_ms: f32,
    ticks: u64,
}

impl ManualClock {
    pub fn new(dt_ms: f32) -> Self {
        Self { dt_ms, ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for ManualClock {
    fn tick(&mut self, _target_fps: u32) -> f32 {
        self.ticks += 1;
        self.dt_ms
    }

    fn fps(&self) -> f32 {
        if self.dt_ms > 0.0 {
            1000.0 / self.dt_ms
        } else {
            0.0
        }
    }
}
