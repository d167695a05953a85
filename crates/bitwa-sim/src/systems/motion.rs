//! Motion evaluation.
//!
//! Positions are pure functions of `(origin, spawn_time, now)`: nothing is
//! integrated, so there is no drift and any frame can be re-derived on its own.

use glam::DVec3;

use bitwa_core::enums::EntityKind;
use bitwa_core::tuning::Tuning;
use bitwa_core::types::sign;

use crate::world::World;

/// World position of an entity of `kind` at `now`.
pub fn evaluate(
    kind: EntityKind,
    origin: DVec3,
    spawn_time: f64,
    now: f64,
    tuning: &Tuning,
) -> DVec3 {
    let dt = now - spawn_time;
    match kind {
        EntityKind::Ship => forward(origin, dt, tuning.far_plane_z, tuning.ship_speed),
        EntityKind::Dust => forward(origin, dt, tuning.far_plane_z, tuning.dust_speed),
        EntityKind::PlayerProjectile => DVec3::new(
            tuning.plasma_lateral_speed * origin.x * dt,
            tuning.plasma_lateral_speed * origin.y * dt,
            tuning.plasma_depth_speed * sign(origin.z) * dt,
        ),
        EntityKind::EnemyProjectile => {
            origin - tuning.enemy_shot_rate * (origin - tuning.enemy_target_offset) * dt
        }
        EntityKind::Explosion => origin,
    }
}

/// Uniform scale of an explosion at `now`.
pub fn explosion_scale(spawn_time: f64, now: f64, tuning: &Tuning) -> f64 {
    tuning.explosion_growth * (now - spawn_time)
}

/// Travel from the far plane toward the camera along +z.
fn forward(origin: DVec3, dt: f64, far_z: f64, speed: f64) -> DVec3 {
    DVec3::new(origin.x, origin.y, far_z + speed * dt)
}

/// Re-evaluate every entity in the world at `now`.
pub fn run(world: &mut World, now: f64, tuning: &Tuning) {
    for ship in world.ships.iter_mut() {
        let b = &mut ship.body;
        b.position = evaluate(EntityKind::Ship, b.origin, b.spawn_time, now, tuning);
    }
    for b in world.player_projectiles.iter_mut() {
        b.position = evaluate(EntityKind::PlayerProjectile, b.origin, b.spawn_time, now, tuning);
    }
    for b in world.enemy_projectiles.iter_mut() {
        b.position = evaluate(EntityKind::EnemyProjectile, b.origin, b.spawn_time, now, tuning);
    }
    for explosion in world.explosions.iter_mut() {
        explosion.body.position = explosion.body.origin;
        explosion.scale = explosion_scale(explosion.body.spawn_time, now, tuning);
    }
    for b in world.dust.iter_mut() {
        b.position = evaluate(EntityKind::Dust, b.origin, b.spawn_time, now, tuning);
    }
}
