//! Frame snapshot: the complete visible state handed to the renderer each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Immutable picture of the world after one frame's spawn, motion,
/// collision and expiry passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ships: Vec<EntityView>,
    pub player_projectiles: Vec<EntityView>,
    pub enemy_projectiles: Vec<EntityView>,
    pub explosions: Vec<EntityView>,
    pub dust: Vec<EntityView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

impl FrameSnapshot {
    /// Views for one kind.
    pub fn views(&self, kind: EntityKind) -> &[EntityView] {
        match kind {
            EntityKind::Ship => &self.ships,
            EntityKind::PlayerProjectile => &self.player_projectiles,
            EntityKind::EnemyProjectile => &self.enemy_projectiles,
            EntityKind::Explosion => &self.explosions,
            EntityKind::Dust => &self.dust,
        }
    }

    /// Total number of live entities.
    pub fn entity_count(&self) -> usize {
        EntityKind::ALL.iter().map(|&k| self.views(k).len()).sum()
    }
}

/// A single drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: DVec3,
    /// Uniform scale. 1.0 for everything but explosions.
    pub scale: f64,
    /// Seconds since spawn.
    pub age: f64,
}

/// Running tally shown on the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub ships_destroyed: u32,
    pub ships_spawned: u32,
    pub plasma_fired: u32,
    pub enemy_shots: u32,
}
