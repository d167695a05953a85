//! Collision system: ships against player plasma balls.
//!
//! Two phases: the full ships × projectiles scan only records doomed indices
//! and appends explosions; both pools are mutated after the scan completes.
//! O(n·m), fine for the tens of entities alive at once.

use std::collections::BTreeSet;

use log::debug;

use bitwa_core::components::Explosion;
use bitwa_core::events::SimEvent;

use crate::world::World;

/// Outcome of one collision pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Every `(ship, projectile)` index pair within the hit radius,
    /// as indices into the pools before removal.
    pub hits: Vec<(usize, usize)>,
    pub ships_destroyed: usize,
    pub projectiles_spent: usize,
}

/// Test every ship against every player projectile at their current positions.
///
/// Each matching pair appends one explosion at the ship's position. A ship or
/// projectile involved in several pairs is still removed only once.
pub fn run(
    world: &mut World,
    now: f64,
    hit_radius: f64,
    events: &mut Vec<SimEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut doomed_ships = BTreeSet::new();
    let mut doomed_projectiles = BTreeSet::new();

    for (i, ship) in world.ships.iter().enumerate() {
        let at = ship.body.position;
        for (j, projectile) in world.player_projectiles.iter().enumerate() {
            if at.distance(projectile.position) <= hit_radius {
                doomed_ships.insert(i);
                doomed_projectiles.insert(j);
                world.explosions.push(Explosion::new(now, at));
                report.hits.push((i, j));
            }
        }
    }

    if report.hits.is_empty() {
        return report;
    }

    for &i in &doomed_ships {
        if let Some(ship) = world.ships.get(i) {
            events.push(SimEvent::ShipDestroyed {
                position: ship.body.position,
            });
        }
    }

    report.ships_destroyed = world.ships.remove_indices(&doomed_ships);
    report.projectiles_spent = world.player_projectiles.remove_indices(&doomed_projectiles);
    debug!(
        "{} hit(s): {} ship(s) destroyed, {} plasma ball(s) spent",
        report.hits.len(),
        report.ships_destroyed,
        report.projectiles_spent
    );
    report
}
