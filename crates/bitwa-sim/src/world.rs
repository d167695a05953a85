//! The simulation world: the five entity pools and the spawn gates.
//!
//! Owned by the engine and passed by `&mut` into each system. Nothing here
//! is global.

use bitwa_core::components::{Body, Explosion, Ship};
use bitwa_core::enums::EntityKind;

use crate::pool::EntityPool;

/// Clock readings at which each spawn gate last fired.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnGates {
    pub last_ship_spawn: f64,
    pub last_dust_spawn: f64,
}

impl SpawnGates {
    /// Gates that count from `start`.
    pub fn starting_at(start: f64) -> Self {
        Self {
            last_ship_spawn: start,
            last_dust_spawn: start,
        }
    }
}

/// Every live entity, one pool per kind.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub ships: EntityPool<Ship>,
    pub player_projectiles: EntityPool<Body>,
    pub enemy_projectiles: EntityPool<Body>,
    pub explosions: EntityPool<Explosion>,
    pub dust: EntityPool<Body>,
    pub gates: SpawnGates,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entities of one kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Ship => self.ships.len(),
            EntityKind::PlayerProjectile => self.player_projectiles.len(),
            EntityKind::EnemyProjectile => self.enemy_projectiles.len(),
            EntityKind::Explosion => self.explosions.len(),
            EntityKind::Dust => self.dust.len(),
        }
    }

    /// Number of live entities across all pools.
    pub fn total(&self) -> usize {
        EntityKind::ALL.iter().map(|&k| self.count(k)).sum()
    }
}
