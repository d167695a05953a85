//! Simulation constants and tuning defaults.

use glam::DVec3;

// --- Spawn gates (seconds) ---

/// Minimum time between enemy ship spawns.
pub const SHIP_SPAWN_INTERVAL: f64 = 2.0;

/// Minimum time between dust mote spawns.
pub const DUST_SPAWN_INTERVAL: f64 = 0.1;

/// Minimum time between two shots of the same ship.
pub const SHIP_FIRE_INTERVAL: f64 = 1.0;

/// A freshly spawned ship holds fire for this long.
pub const SHIP_FIRST_SHOT_DELAY: f64 = 1.0;

// --- Spawn placement ---

/// Ships and dust spawn with x and y drawn uniformly from `-SPAWN_EXTENT..=SPAWN_EXTENT`.
pub const SPAWN_EXTENT: i32 = 15;

/// Depth at which ships and dust enter the scene.
pub const FAR_PLANE_Z: f64 = -100.0;

// --- Motion ---

/// Forward speed of enemy ships along +z (units/s).
pub const SHIP_SPEED: f64 = 20.0;

/// Forward speed of dust motes along +z (units/s).
pub const DUST_SPEED: f64 = 200.0;

/// Lateral scale applied to a plasma ball's aim vector.
pub const PLASMA_LATERAL_SPEED: f64 = 100.0;

/// Depth speed of a plasma ball (units/s).
pub const PLASMA_DEPTH_SPEED: f64 = 100.0;

/// Enemy shots converge on this point, just below the camera.
pub const ENEMY_TARGET_OFFSET: DVec3 = DVec3::new(0.0, -2.0, 10.0);

/// Enemy shots cover the distance to their target in `1 / ENEMY_SHOT_RATE` seconds.
pub const ENEMY_SHOT_RATE: f64 = 2.0;

/// Explosion growth rate (scale units per second).
pub const EXPLOSION_GROWTH: f64 = 10.0;

// --- Lifetimes (seconds) ---

pub const SHIP_TTL: f64 = 10.0;
pub const PLAYER_PROJECTILE_TTL: f64 = 1.0;
pub const ENEMY_PROJECTILE_TTL: f64 = 1.0;
pub const EXPLOSION_TTL: f64 = 0.3;
pub const DUST_TTL: f64 = 1.0;

// --- Collision ---

/// A ship and a plasma ball at or within this distance collide.
pub const HIT_RADIUS: f64 = 2.5;

// --- Frame pacing ---

/// Target presentation rate of the frame loop (Hz).
pub const FRAME_RATE: u32 = 60;

/// Maximum time scale accepted by `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 4.0;
