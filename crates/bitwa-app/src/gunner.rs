//! Auto-gunner: stands in for the player's mouse in headless runs.
//!
//! Picks the closest ship still in front of the camera and fires a plasma
//! ball along the ray that meets it, leading the target for its approach.

use glam::DVec3;

use bitwa_core::commands::PlayerCommand;
use bitwa_core::state::FrameSnapshot;
use bitwa_core::tuning::Tuning;

/// Simulated seconds between auto-gunner shots.
pub const DEFAULT_COOLDOWN: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct AutoGunner {
    /// Minimum simulated seconds between shots.
    pub cooldown: f64,
    last_shot: Option<f64>,
}

impl Default for AutoGunner {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl AutoGunner {
    pub fn new(cooldown: f64) -> Self {
        Self {
            cooldown,
            last_shot: None,
        }
    }

    /// Decide whether to fire this frame, based on the last snapshot.
    pub fn aim(&mut self, snapshot: &FrameSnapshot, tuning: &Tuning) -> Option<PlayerCommand> {
        let now = snapshot.time.now;
        if matches!(self.last_shot, Some(t) if now - t < self.cooldown) {
            return None;
        }

        let target = snapshot
            .ships
            .iter()
            .filter(|s| s.position.z < -1.0)
            .max_by(|a, b| a.position.z.total_cmp(&b.position.z))?;

        let direction = lead_direction(target.position, tuning)?;
        self.last_shot = Some(now);
        Some(PlayerCommand::FirePlasma { direction })
    }
}

/// Aim vector `(ax, ay, -1)` for a plasma ball fired now to meet a ship
/// currently at `ship`, or `None` if the ship is unreachable.
///
/// The ball's depth is `-depth_speed * t` and the ship's is
/// `ship.z + ship_speed * t`, so they meet at `t = -ship.z / (depth_speed + ship_speed)`.
pub fn lead_direction(ship: DVec3, tuning: &Tuning) -> Option<DVec3> {
    let closing = tuning.plasma_depth_speed + tuning.ship_speed;
    if closing <= 0.0 || ship.z >= 0.0 || tuning.plasma_lateral_speed <= 0.0 {
        return None;
    }
    let t = -ship.z / closing;
    if t > tuning.ttl.player_projectile {
        return None;
    }
    let lateral = tuning.plasma_lateral_speed * t;
    Some(DVec3::new(ship.x / lateral, ship.y / lateral, -1.0))
}
