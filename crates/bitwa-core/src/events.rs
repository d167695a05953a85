//! Events emitted by the simulation for audio and HUD feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new enemy ship entered at the far plane.
    ShipSpawned { position: DVec3 },
    /// An enemy ship fired at the player.
    EnemyFired { position: DVec3 },
    /// The player fired a plasma ball.
    PlasmaFired { direction: DVec3 },
    /// A ship was hit and replaced by an explosion.
    ShipDestroyed { position: DVec3 },
}
