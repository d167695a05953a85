//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// `now` is the simulated clock reading in seconds. It only advances while
/// the game is active, so entity ages never jump across a pause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame number (increments by 1 each simulated frame).
    pub frame: u64,
    /// Simulated seconds since start.
    pub now: f64,
    /// Simulated seconds elapsed during the last frame.
    pub dt: f64,
}

impl SimTime {
    /// Advance by `dt` simulated seconds. Negative deltas are treated as zero.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.frame += 1;
        self.dt = dt;
        self.now += dt;
    }
}

/// Component-wise sign with `sign(0) == 0`.
///
/// `f64::signum` maps `0.0` to `1.0`, which would send a projectile with a
/// flat aim vector down the depth axis.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
