//! Application errors.

use std::path::PathBuf;

/// Everything that can stop the application before or while it runs.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Tuning file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tuning file is not valid JSON for `Tuning`
    #[error("invalid tuning file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Bad command line
    #[error("{0}")]
    Args(String),

    /// The game loop thread could not be started
    #[error("failed to spawn game loop thread: {0}")]
    Thread(#[source] std::io::Error),

    #[error("game loop thread panicked")]
    LoopPanicked,
}
