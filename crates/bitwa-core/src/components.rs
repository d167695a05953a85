//! Entity data for the five pools.
//!
//! Entities are plain data. Positions are never integrated: the motion system
//! re-derives `position` from `(origin, spawn_time, now)` every frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Anything with a spawn timestamp. Pools use it for expiry.
pub trait Timed {
    fn spawn_time(&self) -> f64;

    /// Seconds since spawn.
    fn age(&self, now: f64) -> f64 {
        now - self.spawn_time()
    }
}

/// The state shared by every entity kind.
///
/// Player projectiles, enemy projectiles and dust are bare bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Clock reading at creation. Immutable.
    pub spawn_time: f64,
    /// Initial descriptor. A resting position for ships and dust, an aim
    /// vector for player shots, the firing position for enemy shots.
    pub origin: DVec3,
    /// World position as of the last motion pass.
    pub position: DVec3,
}

impl Body {
    /// A body whose position has not been evaluated yet sits at its origin.
    pub fn new(spawn_time: f64, origin: DVec3) -> Self {
        Self {
            spawn_time,
            origin,
            position: origin,
        }
    }
}

impl Timed for Body {
    fn spawn_time(&self) -> f64 {
        self.spawn_time
    }
}

/// Enemy ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Clock reading of this ship's most recent shot.
    pub last_fire_time: f64,
}

impl Timed for Ship {
    fn spawn_time(&self) -> f64 {
        self.body.spawn_time
    }
}

/// Explosion burst. The position stays at the origin; only the scale grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub body: Body,
    /// Uniform scale as of the last motion pass.
    pub scale: f64,
}

impl Explosion {
    pub fn new(spawn_time: f64, at: DVec3) -> Self {
        Self {
            body: Body::new(spawn_time, at),
            scale: 0.0,
        }
    }
}

impl Timed for Explosion {
    fn spawn_time(&self) -> f64 {
        self.body.spawn_time
    }
}
