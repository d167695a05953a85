//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire a plasma ball along `direction`. A direction of `(ax, ay, -1)`
    /// travels down the camera ray through `(ax, ay, -1)`.
    FirePlasma { direction: DVec3 },
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
