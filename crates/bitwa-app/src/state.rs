//! Messages between the front end and the game loop thread.

use bitwa_core::commands::PlayerCommand;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

impl From<PlayerCommand> for GameLoopCommand {
    fn from(command: PlayerCommand) -> Self {
        Self::PlayerCommand(command)
    }
}
