//! Simulation engine for BITWA.
//!
//! Owns the entity pools, runs the per-frame systems in a fixed order,
//! and produces `FrameSnapshot`s for the renderer.

pub mod clock;
pub mod engine;
pub mod pool;
pub mod random;
pub mod systems;
pub mod world;

pub use bitwa_core as core;
pub use engine::SimulationEngine;
