//! Frame clocks.
//!
//! The engine never reads wall time itself; the frame loop hands it a
//! reading from one of these each frame.

use std::time::Instant;

/// Monotonic seconds since the clock was started.
pub trait Clock {
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: every reading is one step later than the last.
/// The first reading is one step after zero.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f64,
    elapsed: f64,
}

impl FixedStepClock {
    pub fn new(step: f64) -> Self {
        Self { step, elapsed: 0.0 }
    }

    /// A clock stepping at `rate` frames per second.
    pub fn from_rate(rate: u32) -> Self {
        Self::new(1.0 / rate.max(1) as f64)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> f64 {
        self.elapsed += self.step;
        self.elapsed
    }
}
