//! Spawn system: time-gated creation of ships, dust and enemy shots.
//!
//! Appends only. Every new entity gets its position evaluated at `now` so no
//! later pass ever sees an unset position.

use glam::DVec3;
use log::debug;

use bitwa_core::components::{Body, Ship};
use bitwa_core::enums::EntityKind;
use bitwa_core::events::SimEvent;
use bitwa_core::tuning::Tuning;

use crate::pool::EntityPool;
use crate::random::RandomSource;
use crate::systems::motion;
use crate::world::World;

/// What the spawner created this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub ships: u32,
    pub dust: u32,
    pub enemy_shots: u32,
}

/// Run all three gates: ships, dust, then per-ship fire.
pub fn run(
    world: &mut World,
    rng: &mut impl RandomSource,
    now: f64,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    if now - world.gates.last_ship_spawn > tuning.ship_spawn_interval {
        let origin = random_origin(rng, tuning.spawn_extent);
        let ship = spawn_ship(world, origin, now, tuning);
        world.gates.last_ship_spawn = now;
        report.ships += 1;
        debug!("ship spawned at {:?} (t={now:.3})", ship.body.position);
        events.push(SimEvent::ShipSpawned {
            position: ship.body.position,
        });
    }

    if now - world.gates.last_dust_spawn > tuning.dust_spawn_interval {
        let origin = random_origin(rng, tuning.spawn_extent);
        spawn_body(&mut world.dust, EntityKind::Dust, origin, now, tuning);
        world.gates.last_dust_spawn = now;
        report.dust += 1;
    }

    report.enemy_shots = fire_gate(world, now, tuning, events);
    report
}

/// Every ship past the depth origin whose weapon has cooled down fires once
/// from its current position.
pub fn fire_gate(world: &mut World, now: f64, tuning: &Tuning, events: &mut Vec<SimEvent>) -> u32 {
    let mut fired = 0;
    for ship in world.ships.iter_mut() {
        if ship.body.position.z < 0.0 && now - ship.last_fire_time > tuning.ship_fire_interval {
            ship.last_fire_time = now;
            let muzzle = ship.body.position;
            spawn_body(
                &mut world.enemy_projectiles,
                EntityKind::EnemyProjectile,
                muzzle,
                now,
                tuning,
            );
            events.push(SimEvent::EnemyFired { position: muzzle });
            fired += 1;
        }
    }
    fired
}

/// Append a ship resting at `origin`, holding fire for the first-shot delay.
pub fn spawn_ship(world: &mut World, origin: DVec3, now: f64, tuning: &Tuning) -> Ship {
    let mut body = Body::new(now, origin);
    body.position = motion::evaluate(EntityKind::Ship, origin, now, now, tuning);
    let ship = Ship {
        body,
        last_fire_time: now + tuning.ship_first_shot_delay,
    };
    world.ships.push(ship);
    ship
}

/// Append a bare body to `pool`, evaluated as `kind`.
pub fn spawn_body(
    pool: &mut EntityPool<Body>,
    kind: EntityKind,
    origin: DVec3,
    now: f64,
    tuning: &Tuning,
) -> Body {
    let mut body = Body::new(now, origin);
    body.position = motion::evaluate(kind, origin, now, now, tuning);
    pool.push(body);
    body
}

/// `(x, y, 0)` with x and y uniform integers in `-extent..=extent`.
fn random_origin(rng: &mut impl RandomSource, extent: i32) -> DVec3 {
    let x = rng.uniform_int(0..=2 * extent) - extent;
    let y = rng.uniform_int(0..=2 * extent) - extent;
    DVec3::new(x as f64, y as f64, 0.0)
}
