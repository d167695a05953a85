//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world, processes player commands, runs all
//! systems in a fixed order, and produces `FrameSnapshot`s. Completely
//! headless (no window or GPU dependency), so a fixed seed and a fixed-step
//! clock give a fully deterministic run.

use std::collections::VecDeque;

use glam::DVec3;
use log::{debug, info, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bitwa_core::commands::PlayerCommand;
use bitwa_core::constants::MAX_TIME_SCALE;
use bitwa_core::enums::{EntityKind, GamePhase};
use bitwa_core::events::SimEvent;
use bitwa_core::state::{FrameSnapshot, ScoreView};
use bitwa_core::tuning::Tuning;
use bitwa_core::types::SimTime;

use crate::clock::Clock;
use crate::random::wall_clock_seed;
use crate::systems;
use crate::world::World;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same clock readings = same simulation.
    /// `None` seeds from the wall clock.
    pub seed: Option<u64>,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Gameplay parameters.
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            time_scale: 1.0,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    tuning: Tuning,
    rng: ChaCha8Rng,
    seed: u64,
    /// Last clock reading accepted, in clock seconds (not simulated seconds).
    last_clock: f64,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(wall_clock_seed);
        info!(
            "simulation starting (seed {seed}, time scale {:.2})",
            config.time_scale
        );
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            last_clock: 0.0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            score: ScoreView::default(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame using a reading from `clock`.
    pub fn tick_with(&mut self, clock: &mut impl Clock) -> FrameSnapshot {
        let now = clock.now();
        self.tick(now)
    }

    /// Advance one frame to clock reading `clock_now` (seconds since start)
    /// and return the resulting snapshot.
    ///
    /// Readings earlier than the previous one are treated as no time passing.
    pub fn tick(&mut self, clock_now: f64) -> FrameSnapshot {
        let elapsed = if clock_now < self.last_clock {
            warn!(
                "clock went backwards ({clock_now:.4} < {:.4}); holding time",
                self.last_clock
            );
            0.0
        } else {
            let elapsed = clock_now - self.last_clock;
            self.last_clock = clock_now;
            elapsed
        };

        let shots = self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance(elapsed * self.time_scale);
            self.fire_plasma(&shots);
            self.run_systems();
        } else if !shots.is_empty() {
            debug!("dropping {} shot(s) fired while paused", shots.len());
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events, &self.score)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// The seed the RNG was started with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the gameplay parameters in use.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get the running score.
    pub fn score(&self) -> ScoreView {
        self.score
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the world (for tests that stage entities).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands. Returns the directions of plasma shots,
    /// which spawn only after the clock has advanced.
    fn process_commands(&mut self) -> Vec<DVec3> {
        let mut shots = Vec::new();
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::FirePlasma { direction } => shots.push(direction),
                PlayerCommand::SetTimeScale { scale } => {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                    debug!("time scale set to {:.2}", self.time_scale);
                }
                PlayerCommand::Pause => {
                    if self.phase == GamePhase::Active {
                        self.phase = GamePhase::Paused;
                        debug!("paused at t={:.3}", self.time.now);
                    }
                }
                PlayerCommand::Resume => {
                    if self.phase == GamePhase::Paused {
                        self.phase = GamePhase::Active;
                        debug!("resumed at t={:.3}", self.time.now);
                    }
                }
            }
        }
        shots
    }

    /// Spawn the player's plasma balls for this frame.
    fn fire_plasma(&mut self, shots: &[DVec3]) {
        for &direction in shots {
            systems::spawner::spawn_body(
                &mut self.world.player_projectiles,
                EntityKind::PlayerProjectile,
                direction,
                self.time.now,
                &self.tuning,
            );
            self.score.plasma_fired += 1;
            self.events.push(SimEvent::PlasmaFired { direction });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.now;

        // 1. Spawning (ships, dust, enemy fire)
        let spawned = systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            now,
            &self.tuning,
            &mut self.events,
        );
        self.score.ships_spawned += spawned.ships;
        self.score.enemy_shots += spawned.enemy_shots;

        // 2. Motion
        systems::motion::run(&mut self.world, now, &self.tuning);

        // 3. Collision (ships × plasma balls)
        let collisions = systems::collision::run(
            &mut self.world,
            now,
            self.tuning.hit_radius,
            &mut self.events,
        );
        self.score.ships_destroyed += collisions.ships_destroyed as u32;

        // 4. Expiry
        systems::expiry::run(&mut self.world, now, &self.tuning.ttl);

        trace!(
            "frame {} t={now:.3}: {} live entities",
            self.time.frame,
            self.world.total()
        );
    }
}
