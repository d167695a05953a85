//! Expiry system: removes entities that have outlived their kind's TTL.
//!
//! Runs after collision removal, on whatever is left, so nothing is removed
//! twice in one frame.

use log::trace;

use bitwa_core::tuning::Lifetimes;

use crate::world::World;

/// Per-pool removal counts for one expiry pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiryReport {
    pub ships: usize,
    pub player_projectiles: usize,
    pub enemy_projectiles: usize,
    pub explosions: usize,
    pub dust: usize,
}

impl ExpiryReport {
    pub fn total(&self) -> usize {
        self.ships + self.player_projectiles + self.enemy_projectiles + self.explosions + self.dust
    }
}

/// Expire every pool. An entity is expired once `now - spawn_time > ttl`.
pub fn run(world: &mut World, now: f64, ttl: &Lifetimes) -> ExpiryReport {
    let report = ExpiryReport {
        ships: world.ships.expire(now, ttl.ship),
        player_projectiles: world.player_projectiles.expire(now, ttl.player_projectile),
        enemy_projectiles: world.enemy_projectiles.expire(now, ttl.enemy_projectile),
        explosions: world.explosions.expire(now, ttl.explosion),
        dust: world.dust.expire(now, ttl.dust),
    };
    if report.total() > 0 {
        trace!("expired {report:?} at t={now:.3}");
    }
    report
}
