//! Snapshot builder: reads the world and produces a `FrameSnapshot`.

use bitwa_core::components::{Body, Timed};
use bitwa_core::enums::{EntityKind, GamePhase};
use bitwa_core::events::SimEvent;
use bitwa_core::state::{EntityView, FrameSnapshot, ScoreView};
use bitwa_core::types::SimTime;

use crate::pool::EntityPool;
use crate::world::World;

/// Build the snapshot the renderer consumes for this frame.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
    score: &ScoreView,
) -> FrameSnapshot {
    let now = time.now;
    FrameSnapshot {
        time: *time,
        phase,
        ships: world
            .ships
            .iter()
            .map(|s| view(EntityKind::Ship, &s.body, 1.0, now))
            .collect(),
        player_projectiles: body_views(
            &world.player_projectiles,
            EntityKind::PlayerProjectile,
            now,
        ),
        enemy_projectiles: body_views(&world.enemy_projectiles, EntityKind::EnemyProjectile, now),
        explosions: world
            .explosions
            .iter()
            .map(|e| view(EntityKind::Explosion, &e.body, e.scale, now))
            .collect(),
        dust: body_views(&world.dust, EntityKind::Dust, now),
        events,
        score: *score,
    }
}

fn body_views(pool: &EntityPool<Body>, kind: EntityKind, now: f64) -> Vec<EntityView> {
    pool.iter().map(|b| view(kind, b, 1.0, now)).collect()
}

fn view(kind: EntityKind, body: &Body, scale: f64, now: f64) -> EntityView {
    EntityView {
        kind,
        position: body.position,
        scale,
        age: body.age(now),
    }
}
