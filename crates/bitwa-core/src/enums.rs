//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The five entity pools of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Enemy ship flying in from the far plane.
    Ship,
    /// Plasma ball fired by the player.
    PlayerProjectile,
    /// Plasma ball fired by an enemy ship at the player.
    EnemyProjectile,
    /// Expanding burst left behind by a destroyed ship.
    Explosion,
    /// Background particle streaking past the camera.
    Dust,
}

impl EntityKind {
    /// All kinds, in world update order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Ship,
        EntityKind::PlayerProjectile,
        EntityKind::EnemyProjectile,
        EntityKind::Explosion,
        EntityKind::Dust,
    ];
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulated time advances and all systems run.
    #[default]
    Active,
    /// Simulated time is frozen; snapshots still go out.
    Paused,
}
