//! Game loop thread: drives the simulation engine one frame at a time.
//!
//! The engine and the renderer are created inside this thread because it's
//! cleaner for ownership. Commands arrive via `mpsc` channel; the thread
//! returns a `LoopSummary` when it stops.

use std::io::BufRead;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use bitwa_core::constants::FRAME_RATE;
use bitwa_core::events::SimEvent;
use bitwa_core::state::{FrameSnapshot, ScoreView};
use bitwa_sim::clock::{Clock, FixedStepClock, SystemClock};
use bitwa_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::gunner::AutoGunner;
use crate::headless::headless_renderer;
use crate::render::FlyCamera;
use crate::state::GameLoopCommand;

/// How the loop is paced and when it stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    pub frame_rate: u32,
    /// Stop after this many frames. `None` runs until shutdown.
    pub max_frames: Option<u64>,
    /// Read the wall clock and sleep between frames. Otherwise every frame
    /// advances exactly `1 / frame_rate` seconds with no sleeping.
    pub realtime: bool,
    /// Let the auto-gunner fire at incoming ships.
    pub gunner: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            max_frames: None,
            realtime: false,
            gunner: true,
        }
    }
}

/// What the loop reports when it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub seed: u64,
    /// Simulated seconds elapsed.
    pub sim_time: f64,
    pub score: ScoreView,
    pub draw_calls: u64,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the summary.
pub fn spawn_game_loop(
    config: SimConfig,
    settings: LoopSettings,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bitwa-game-loop".into())
        .spawn(move || run_game_loop(config, settings, cmd_rx))
        .map_err(AppError::Thread)?;

    Ok((cmd_tx, handle))
}

/// Wait for the loop thread to finish.
pub fn join_game_loop(handle: JoinHandle<LoopSummary>) -> Result<LoopSummary, AppError> {
    handle.join().map_err(|_| AppError::LoopPanicked)
}

/// The game loop. Runs until Shutdown command, channel disconnect, or the
/// frame limit.
pub fn run_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
) -> LoopSummary {
    let mut engine = SimulationEngine::new(config);
    let mut clock: Box<dyn Clock> = if settings.realtime {
        Box::new(SystemClock::start())
    } else {
        Box::new(FixedStepClock::from_rate(settings.frame_rate))
    };
    let mut renderer = headless_renderer();
    let camera = FlyCamera::default();
    let mut gunner = settings.gunner.then(AutoGunner::default);

    let frame_duration = Duration::from_secs_f64(1.0 / settings.frame_rate.max(1) as f64);
    let mut next_frame_time = Instant::now();
    let mut last_snapshot: Option<FrameSnapshot> = None;
    let mut frames = 0u64;
    let mut draw_calls = 0u64;

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("shutdown requested");
                    break 'frames;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        // 2. Return fire, aiming at last frame's picture
        if let (Some(gunner), Some(snapshot)) = (gunner.as_mut(), last_snapshot.as_ref()) {
            if let Some(cmd) = gunner.aim(snapshot, engine.tuning()) {
                engine.queue_command(cmd);
            }
        }

        // 3. Advance one frame (engine handles pause and time scale)
        let snapshot = engine.tick(clock.now());
        frames += 1;

        // 4. Draw
        draw_calls += renderer.draw(&snapshot, &camera) as u64;
        log_events(&snapshot);
        last_snapshot = Some(snapshot);

        if settings.max_frames.is_some_and(|max| frames >= max) {
            break;
        }

        // 5. Sleep until next frame
        if settings.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_frame_time = now;
            }
        }
    }

    let summary = LoopSummary {
        frames,
        seed: engine.seed(),
        sim_time: engine.time().now,
        score: engine.score(),
        draw_calls,
    };
    info!(
        "game loop stopped after {} frames ({:.2}s simulated)",
        summary.frames, summary.sim_time
    );
    summary
}

/// Close signal for an unbounded loop: a `q` or `quit` line on `input`, or
/// end of input, sends `Shutdown`.
pub fn watch_for_close(input: impl BufRead, commands: &mpsc::Sender<GameLoopCommand>) {
    for line in input.lines() {
        match line {
            Ok(line) if matches!(line.trim(), "q" | "quit") => break,
            Ok(_) => {}
            Err(err) => {
                warn!("close watcher stopped reading: {err}");
                break;
            }
        }
    }
    // The loop may already have stopped on its frame limit.
    let _ = commands.send(GameLoopCommand::Shutdown);
}

fn log_events(snapshot: &FrameSnapshot) {
    for event in &snapshot.events {
        match event {
            SimEvent::ShipDestroyed { position } => {
                debug!("ship destroyed at {position:?} (t={:.3})", snapshot.time.now)
            }
            other => debug!("{other:?}"),
        }
    }
}
