//! Tunable gameplay parameters.
//!
//! Every field defaults to the matching constant in [`crate::constants`].
//! Missing fields in a tuning file keep their defaults.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EntityKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship_spawn_interval: f64,
    pub dust_spawn_interval: f64,
    pub ship_fire_interval: f64,
    pub ship_first_shot_delay: f64,
    pub spawn_extent: i32,
    pub far_plane_z: f64,
    pub ship_speed: f64,
    pub dust_speed: f64,
    pub plasma_lateral_speed: f64,
    pub plasma_depth_speed: f64,
    pub enemy_target_offset: DVec3,
    pub enemy_shot_rate: f64,
    pub explosion_growth: f64,
    pub hit_radius: f64,
    pub ttl: Lifetimes,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_spawn_interval: SHIP_SPAWN_INTERVAL,
            dust_spawn_interval: DUST_SPAWN_INTERVAL,
            ship_fire_interval: SHIP_FIRE_INTERVAL,
            ship_first_shot_delay: SHIP_FIRST_SHOT_DELAY,
            spawn_extent: SPAWN_EXTENT,
            far_plane_z: FAR_PLANE_Z,
            ship_speed: SHIP_SPEED,
            dust_speed: DUST_SPEED,
            plasma_lateral_speed: PLASMA_LATERAL_SPEED,
            plasma_depth_speed: PLASMA_DEPTH_SPEED,
            enemy_target_offset: ENEMY_TARGET_OFFSET,
            enemy_shot_rate: ENEMY_SHOT_RATE,
            explosion_growth: EXPLOSION_GROWTH,
            hit_radius: HIT_RADIUS,
            ttl: Lifetimes::default(),
        }
    }
}

/// Time-to-live per entity kind (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lifetimes {
    pub ship: f64,
    pub player_projectile: f64,
    pub enemy_projectile: f64,
    pub explosion: f64,
    pub dust: f64,
}

impl Default for Lifetimes {
    fn default() -> Self {
        Self {
            ship: SHIP_TTL,
            player_projectile: PLAYER_PROJECTILE_TTL,
            enemy_projectile: ENEMY_PROJECTILE_TTL,
            explosion: EXPLOSION_TTL,
            dust: DUST_TTL,
        }
    }
}

impl Lifetimes {
    pub fn for_kind(&self, kind: EntityKind) -> f64 {
        match kind {
            EntityKind::Ship => self.ship,
            EntityKind::PlayerProjectile => self.player_projectile,
            EntityKind::EnemyProjectile => self.enemy_projectile,
            EntityKind::Explosion => self.explosion,
            EntityKind::Dust => self.dust,
        }
    }
}
